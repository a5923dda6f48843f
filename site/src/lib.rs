//! # smartbus-site
//!
//! Leptos SSR renderer for the SmartBus landing page.
//!
//! The page is a single static HTML document: header, hero, features,
//! screenshots, download call-to-action and footer. Every data-bearing section
//! reads from a [`types::SiteContent`] value, so copy changes never require
//! markup edits.
//!
//! ## Quick Start
//!
//! ```rust
//! use smartbus_site::{render_site, RenderOptions, types::{SiteContent, Stat}};
//!
//! let content = SiteContent {
//!     stats: vec![Stat::new("Daily Users", "50K+")],
//!     ..Default::default()
//! };
//!
//! let html = render_site(&content, &RenderOptions::default());
//! assert!(html.contains("50K+"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for page content
//! - [`components`] - Leptos UI components, one per page section
//! - [`styles`] - CSS constants
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::SiteContent;

/// Anchor of the features section.
pub const SECTION_FEATURES: &str = "features";
/// Anchor of the screenshots section.
pub const SECTION_SCREENSHOTS: &str = "screenshots";
/// Anchor of the download section.
pub const SECTION_DOWNLOAD: &str = "download";

/// In-page navigation entries, in header order: (anchor, label).
pub const NAV_SECTIONS: [(&str, &str); 3] = [
    (SECTION_FEATURES, "Features"),
    (SECTION_SCREENSHOTS, "Screenshots"),
    (SECTION_DOWNLOAD, "Download"),
];

/// Render the complete landing page.
///
/// Returns a full HTML document as a `String`, including `<!DOCTYPE html>`.
/// Rendering cannot fail: empty records simply produce empty sections.
///
/// # Example
///
/// ```rust
/// use smartbus_site::{render_site, RenderOptions, types::SiteContent};
///
/// let html = render_site(&SiteContent::default(), &RenderOptions::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_site(content: &SiteContent, options: &RenderOptions) -> String {
    let doc = view! {
        <SiteDocument content=content.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// How the page stylesheet is delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stylesheet {
    /// Embed [`styles::SITE_CSS`] in a `<style>` element
    Inline,
    /// Reference an external file, e.g. `styles.css` next to `index.html`
    External(String),
}

/// Document-level render settings.
///
/// # Example
///
/// ```rust
/// use smartbus_site::{RenderOptions, Stylesheet};
///
/// let options = RenderOptions {
///     title: "SmartBus".into(),
///     stylesheet: Stylesheet::External("styles.css".into()),
///     ..Default::default()
/// };
/// assert_eq!(options.description, RenderOptions::default().description);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// `<title>` of the page
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// Inline or linked CSS
    pub stylesheet: Stylesheet,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "SmartBus - The Future of Public Transport".into(),
            description: "Real-time tracking, mobile ticketing and intelligent route planning for your daily commute.".into(),
            stylesheet: Stylesheet::Inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use types::{DownloadTarget, Feature, Image, Platform, Showcase, Stat};

    fn placeholder_target(text: &str) -> DownloadTarget {
        DownloadTarget {
            available: false,
            version: "1.0.0".into(),
            size: "45MB".into(),
            last_updated: "January 2025".into(),
            download_url: None,
            placeholder_text: text.into(),
        }
    }

    fn sample_content() -> SiteContent {
        let mut downloads = BTreeMap::new();
        downloads.insert(Platform::Android, placeholder_target("APK Download Placeholder"));
        downloads.insert(Platform::Ios, placeholder_target("App Store Placeholder"));

        SiteContent {
            stats: vec![
                Stat::new("Daily Users", "50K+"),
                Stat::new("On-Time Performance", "98%"),
                Stat::new("Routes Covered", "200+"),
            ],
            features: vec![Feature {
                id: "real-time-tracking".into(),
                name: "Real-Time Tracking".into(),
                description: "Track buses in real-time.".into(),
                icon: "location".into(),
                benefits: vec!["Accurate ETA predictions".into()],
            }],
            showcases: vec![Showcase {
                feature_id: "real-time-tracking".into(),
                title: "Real-Time Bus Tracking".into(),
                description: "Never miss your bus again.".into(),
                image: Image {
                    src: "tracking.png".into(),
                    alt: "Tracking screen".into(),
                },
                badge: "Live Demo".into(),
            }],
            downloads,
            hero_image: None,
        }
    }

    /// Text of every element opened with `open_tag`, in document order.
    fn texts_after(html: &str, open_tag: &str) -> Vec<String> {
        html.split(open_tag)
            .skip(1)
            .filter_map(|rest| rest.split('<').next())
            .map(|text| text.trim().to_string())
            .collect()
    }

    #[test]
    fn renders_empty_site() {
        let html = render_site(&SiteContent::default(), &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("SmartBus"));
    }

    #[test]
    fn section_anchors_are_unique() {
        let html = render_site(&sample_content(), &RenderOptions::default());

        for (anchor, _) in NAV_SECTIONS {
            let id_attr = format!("id=\"{}\"", anchor);
            assert_eq!(html.matches(&id_attr).count(), 1, "anchor {anchor}");
            assert!(html.contains(&format!("href=\"#{}\"", anchor)));
        }
    }

    #[test]
    fn hero_stats_follow_content() {
        let html = render_site(&sample_content(), &RenderOptions::default());
        let values = texts_after(&html.replace("<!>", ""), "<div class=\"hero-stat-value\">");

        assert_eq!(values, vec!["50K+", "98%", "200+"]);
    }

    #[test]
    fn unavailable_download_is_inert_placeholder() {
        let html = render_site(&sample_content(), &RenderOptions::default());

        assert!(html.contains("APK Download Placeholder"));
        assert!(html.contains("App Store Placeholder"));
        assert_eq!(html.matches("aria-disabled=\"true\"").count(), 2);
        assert!(!html.contains("class=\"download-btn download-link\""));
        assert!(html.contains("Version 1.0.0"));
    }

    #[test]
    fn available_download_links_without_placeholder() {
        let mut content = sample_content();
        content.downloads.insert(
            Platform::Android,
            DownloadTarget {
                available: true,
                download_url: Some("https://downloads.example.com/smartbus.apk".into()),
                ..placeholder_target("APK Download Placeholder")
            },
        );

        let html = render_site(&content, &RenderOptions::default());

        assert!(html.contains("href=\"https://downloads.example.com/smartbus.apk\""));
        assert!(!html.contains("APK Download Placeholder"));
        assert!(html.contains("App Store Placeholder"));
        assert_eq!(html.matches("aria-disabled=\"true\"").count(), 1);
    }

    #[test]
    fn download_cards_carry_platform_names() {
        let html = render_site(&sample_content(), &RenderOptions::default());

        assert!(html.contains("data-platform=\"android\""));
        assert!(html.contains("data-platform=\"ios\""));
    }

    #[test]
    fn showcase_lists_feature_benefits() {
        let html = render_site(&sample_content(), &RenderOptions::default());

        assert!(html.contains("Real-Time Bus Tracking"));
        assert!(html.contains("Live Demo"));
        assert!(html.contains("Accurate ETA predictions"));
        assert!(html.contains("src=\"tracking.png\""));
    }

    #[test]
    fn external_stylesheet_is_linked_not_inlined() {
        let options = RenderOptions {
            stylesheet: Stylesheet::External("styles.css".into()),
            ..Default::default()
        };
        let html = render_site(&sample_content(), &options);

        assert!(html.contains("href=\"styles.css\""));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn title_and_description_are_rendered() {
        let options = RenderOptions {
            title: "SmartBus Preview".into(),
            description: "Preview build".into(),
            ..Default::default()
        };
        let html = render_site(&SiteContent::default(), &options);

        assert!(html.contains("<title>"));
        assert!(html.contains("SmartBus Preview"));
        assert!(html.contains("content=\"Preview build\""));
    }
}
