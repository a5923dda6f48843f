//! Placeholder transit data: buses near the user and the route catalogue.
//!
//! Nothing on the landing page renders these yet. They are kept in the
//! content store, validated, and exported through `smartbus content`.

use serde::{Deserialize, Serialize};

/// WGS84 position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// How full a bus is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupancy {
    #[default]
    Low,
    Medium,
    High,
}

/// A bus approaching the user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub id: String,
    /// Display name of the route the bus serves ("Route 15")
    pub route: String,
    pub current_location: Coordinates,
    pub eta_minutes: u32,
    pub occupancy: Occupancy,
    /// Upcoming stops, nearest first
    #[serde(default)]
    pub next_stops: Vec<String>,
}

/// A scheduled line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    /// Hex colour used for the line ("#3B82F6")
    pub color: String,
    /// Stops from origin to destination
    #[serde(default)]
    pub stops: Vec<String>,
    pub frequency: String,
    /// "06:00 - 23:00"
    pub operating_hours: String,
}
