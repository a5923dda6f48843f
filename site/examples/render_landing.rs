//! Minimal landing page render.
//!
//! Run with: `cargo run -p smartbus-site --example render_landing`

use smartbus_site::{
    render_site,
    types::{Feature, SiteContent, Stat},
    RenderOptions,
};

fn main() {
    let content = SiteContent {
        stats: vec![
            Stat::new("Daily Users", "50K+"),
            Stat::new("Routes Covered", "200+"),
        ],
        features: vec![Feature {
            id: "real-time-tracking".into(),
            name: "Real-Time Tracking".into(),
            description: "Track buses in real-time.".into(),
            icon: "location".into(),
            benefits: vec!["Live GPS tracking for all buses".into()],
        }],
        ..Default::default()
    };

    let html = render_site(&content, &RenderOptions::default());

    let output_path = "landing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
