//! Rendering the built-in content through the binding step.

use pretty_assertions::assert_eq;
use smartbus::store::ContentStore;
use smartbus_site::{render_site, RenderOptions, NAV_SECTIONS};

fn builtin_page() -> String {
    render_site(&ContentStore::builtin().site_content(), &RenderOptions::default())
}

/// Text content of every element opened with `open_tag`, in document order.
fn texts_after(html: &str, open_tag: &str) -> Vec<String> {
    html.replace("<!>", "")
        .split(open_tag)
        .skip(1)
        .filter_map(|rest| rest.split('<').next().map(|t| t.trim().to_string()))
        .collect()
}

#[test]
fn stats_panel_shows_exactly_the_headline_values() {
    let html = builtin_page();
    assert_eq!(
        texts_after(&html, "<div class=\"hero-stat-value\">"),
        vec!["50K+", "98%", "200+"]
    );
    assert_eq!(
        texts_after(&html, "<div class=\"hero-stat-label\">"),
        vec!["Daily Users", "On-Time Performance", "Routes Covered"]
    );
}

#[test]
fn every_section_anchor_appears_once() {
    let html = builtin_page();
    for (anchor, label) in NAV_SECTIONS {
        assert_eq!(html.matches(&format!("id=\"{anchor}\"")).count(), 1, "{label}");
    }
}

#[test]
fn placeholders_render_verbatim_on_disabled_controls() {
    let html = builtin_page();

    assert!(html.contains("📱 APK Download Placeholder"));
    assert!(html.contains("🍎 App Store Placeholder"));
    assert_eq!(html.matches("aria-disabled=\"true\"").count(), 2);
    assert_eq!(html.matches("Coming Soon").count(), 2);
    assert!(html.contains("Version 1.0.0 • Last updated: January 2025 • Size: 45MB"));
}

#[test]
fn features_and_showcases_come_from_the_store() {
    let store = ContentStore::builtin();
    let html = builtin_page();

    for feature in store.features() {
        assert!(html.contains(&format!("data-feature=\"{}\"", feature.id)));
        assert!(html.contains(&feature.name));
    }
    for showcase in store.showcases() {
        assert!(html.contains(&showcase.title));
        assert!(html.contains(&showcase.badge));
    }
    assert!(html.contains("Predictive demand forecasting"));
}

#[test]
fn transit_records_are_not_rendered() {
    let html = builtin_page();
    assert!(!html.contains("bus-001"));
    assert!(!html.contains("Terminal A"));
}
