//! Built-in content records.
//!
//! These are the values the site ships with when no content file is given.

use std::collections::BTreeMap;

use crate::store::{ContentStore, Health, PlatformStats};
use crate::transit::{Bus, Coordinates, Occupancy, Route};
use smartbus_site::types::{DownloadTarget, Feature, Image, Platform, Showcase};

pub(crate) fn builtin() -> ContentStore {
    ContentStore {
        health: Health {
            status: "healthy".into(),
            message: "SmartBus API is running".into(),
        },
        stats: PlatformStats {
            daily_users: "50K+".into(),
            on_time_performance: "98%".into(),
            routes_covered: "200+".into(),
            total_trips: "1M+".into(),
            cities_served: "25".into(),
            user_satisfaction: "4.8/5".into(),
        },
        features: features(),
        showcases: showcases(),
        download_info: download_info(),
        nearby_buses: nearby_buses(),
        routes: routes(),
        hero_image: Some(Image {
            src: unsplash("photo-1615514659684-cece95b952f4"),
            alt: "Modern Smart Bus".into(),
        }),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?crop=entropy&cs=srgb&fm=jpg&q=85")
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            id: "real-time-tracking".into(),
            name: "Real-Time Tracking".into(),
            description: "Track buses in real-time with precise GPS locations and accurate ETAs for every stop.".into(),
            icon: "location".into(),
            benefits: strings(&[
                "Live GPS tracking for all buses",
                "Accurate ETA predictions",
                "Automatic delay notifications",
            ]),
        },
        Feature {
            id: "mobile-ticketing".into(),
            name: "Mobile Ticketing".into(),
            description: "Purchase tickets digitally with secure payments and instant QR code generation.".into(),
            icon: "ticket".into(),
            benefits: strings(&[
                "Secure digital payments",
                "Instant QR code tickets",
                "Monthly passes & discounts",
            ]),
        },
        Feature {
            id: "route-optimization".into(),
            name: "Route Optimization".into(),
            description: "AI-powered route planning and optimization for maximum efficiency and reduced wait times.".into(),
            icon: "analytics".into(),
            benefits: strings(&[
                "Real-time analytics dashboard",
                "Predictive demand forecasting",
                "Automated fleet management",
            ]),
        },
    ]
}

fn showcases() -> Vec<Showcase> {
    vec![
        Showcase {
            feature_id: "real-time-tracking".into(),
            title: "Real-Time Bus Tracking".into(),
            description: "Never miss your bus again. Our advanced GPS tracking system provides real-time locations of all buses on your route, with accurate arrival predictions down to the minute.".into(),
            image: Image {
                src: unsplash("photo-1542641728-6ca359b085f4"),
                alt: "Mobile App Real-Time Tracking".into(),
            },
            badge: "Live Demo".into(),
        },
        Showcase {
            feature_id: "mobile-ticketing".into(),
            title: "Mobile Ticketing".into(),
            description: "Go completely cashless with our secure mobile ticketing system. Purchase, store, and validate tickets directly from your smartphone with instant QR code generation.".into(),
            image: Image {
                src: unsplash("photo-1551721434-8b94ddff0e6d"),
                alt: "Mobile Ticketing Interface".into(),
            },
            badge: "Secure Payment".into(),
        },
        Showcase {
            feature_id: "route-optimization".into(),
            title: "AI-Powered Route Optimization".into(),
            description: "Our intelligent dashboard uses machine learning to optimize routes, predict demand, and improve overall system efficiency for transport operators.".into(),
            image: Image {
                src: unsplash("photo-1597075095400-fb3f0de70140"),
                alt: "Route Optimization Dashboard".into(),
            },
            badge: "AI-Powered".into(),
        },
    ]
}

fn download_info() -> BTreeMap<Platform, DownloadTarget> {
    let mut targets = BTreeMap::new();
    targets.insert(
        Platform::Android,
        DownloadTarget {
            available: false,
            version: "1.0.0".into(),
            size: "45MB".into(),
            last_updated: "January 2025".into(),
            download_url: None,
            placeholder_text: "📱 APK Download Placeholder".into(),
        },
    );
    targets.insert(
        Platform::Ios,
        DownloadTarget {
            available: false,
            version: "1.0.0".into(),
            size: "42MB".into(),
            last_updated: "January 2025".into(),
            download_url: None,
            placeholder_text: "🍎 App Store Placeholder".into(),
        },
    );
    targets
}

fn nearby_buses() -> Vec<Bus> {
    vec![
        Bus {
            id: "bus-001".into(),
            route: "Route 15".into(),
            current_location: Coordinates {
                lat: 40.7128,
                lng: -74.0060,
            },
            eta_minutes: 5,
            occupancy: Occupancy::Medium,
            next_stops: strings(&["Central Station", "City Mall", "University"]),
        },
        Bus {
            id: "bus-002".into(),
            route: "Route 22".into(),
            current_location: Coordinates {
                lat: 40.7580,
                lng: -73.9855,
            },
            eta_minutes: 12,
            occupancy: Occupancy::Low,
            next_stops: strings(&["Downtown", "Business District", "Airport"]),
        },
    ]
}

fn routes() -> Vec<Route> {
    vec![
        Route {
            id: "route-15".into(),
            name: "Route 15".into(),
            color: "#3B82F6".into(),
            stops: strings(&[
                "Terminal A",
                "Central Station",
                "City Mall",
                "University",
                "Hospital",
            ]),
            frequency: "Every 10 minutes".into(),
            operating_hours: "06:00 - 23:00".into(),
        },
        Route {
            id: "route-22".into(),
            name: "Route 22".into(),
            color: "#10B981".into(),
            stops: strings(&["Downtown", "Business District", "Shopping Center", "Airport"]),
            frequency: "Every 15 minutes".into(),
            operating_hours: "05:30 - 24:00".into(),
        },
    ]
}
