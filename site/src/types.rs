//! Page content types consumed by the renderer.
//!
//! These types define what the page can show. They're designed to be:
//!
//! - **Serializable** - the JSON field names match the content file format
//! - **Clone-friendly** - components take owned data
//! - **Default-able** - build partial content with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use smartbus_site::types::{Feature, SiteContent, Stat};
//!
//! let content = SiteContent {
//!     stats: vec![Stat::new("Daily Users", "50K+")],
//!     features: vec![Feature {
//!         id: "real-time-tracking".into(),
//!         name: "Real-Time Tracking".into(),
//!         benefits: vec!["Live GPS tracking for all buses".into()],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.features.len(), 1);
//! ```

use std::collections::BTreeMap;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A headline figure shown in the hero panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Caption under the value ("Daily Users")
    pub label: String,
    /// Display value, already formatted ("50K+")
    pub value: String,
}

impl Stat {
    /// Build a stat from a label and a display value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A product feature card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Stable identifier, referenced by [`Showcase::feature_id`]
    pub id: String,
    /// Card title
    pub name: String,
    /// One-sentence pitch
    pub description: String,
    /// Icon key: "location", "ticket", "analytics"
    pub icon: String,
    /// Ordered benefit bullets (never empty in valid content)
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// An image reference (remote URL or relative path).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image source
    pub src: String,
    /// Alternative text
    pub alt: String,
}

/// One row of the screenshots section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showcase {
    /// Feature whose benefits are listed next to the screenshot
    pub feature_id: String,
    /// Row heading
    pub title: String,
    /// Longer copy for the row
    pub description: String,
    /// Screenshot
    pub image: Image,
    /// Small label pinned to the screenshot corner
    pub badge: String,
}

/// Distribution platform of the mobile app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android APK
    Android,
    /// Apple App Store
    Ios,
}

impl Platform {
    /// Serialized name: `android` or `ios`.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    /// Card title for the download section.
    pub fn title(self) -> &'static str {
        match self {
            Platform::Android => "Android APK",
            Platform::Ios => "iOS App Store",
        }
    }

    /// Short line under the card title.
    pub fn blurb(self) -> &'static str {
        match self {
            Platform::Android => "Download the latest version for Android devices",
            Platform::Ios => "Download from the Apple App Store",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-platform download placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadTarget {
    /// Whether a real download exists yet
    pub available: bool,
    /// Release version ("1.0.0")
    pub version: String,
    /// Package size ("45MB")
    pub size: String,
    /// Human date of the last release ("January 2025")
    pub last_updated: String,
    /// Where the button points once `available` is true
    #[serde(default)]
    pub download_url: Option<String>,
    /// Label shown on the inert control while unavailable
    #[serde(default)]
    pub placeholder_text: String,
}

impl DownloadTarget {
    /// URL to link to, only when the target is actually downloadable.
    pub fn link(&self) -> Option<&str> {
        if self.available {
            self.download_url.as_deref()
        } else {
            None
        }
    }
}

/// Everything the page renderer reads.
///
/// Produced by the content store's binding step; the renderer never reaches
/// for data outside this value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteContent {
    /// Hero stats, in display order
    pub stats: Vec<Stat>,
    /// Feature cards, in display order
    pub features: Vec<Feature>,
    /// Screenshot rows, in display order
    pub showcases: Vec<Showcase>,
    /// Download cards keyed by platform (Android first)
    pub downloads: BTreeMap<Platform, DownloadTarget>,
    /// Hero illustration
    pub hero_image: Option<Image>,
}

impl SiteContent {
    /// Look up a feature by id.
    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Benefits of the feature a showcase points at; empty when unknown.
    pub fn benefits_for(&self, showcase: &Showcase) -> Vec<String> {
        self.feature(&showcase.feature_id)
            .map(|f| f.benefits.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platforms_serialize_lowercase_and_sort_android_first() {
        let mut downloads = BTreeMap::new();
        downloads.insert(Platform::Ios, DownloadTarget::default());
        downloads.insert(Platform::Android, DownloadTarget::default());

        let keys: Vec<_> = downloads.keys().copied().collect();
        assert_eq!(keys, vec![Platform::Android, Platform::Ios]);

        let json = serde_json::to_value(&downloads).expect("serialize");
        assert!(json.get("android").is_some());
        assert!(json.get("ios").is_some());
    }

    #[test]
    fn platform_display_matches_serialized_name() {
        for platform in [Platform::Android, Platform::Ios] {
            let json = serde_json::to_string(&platform).expect("serialize");
            assert_eq!(json, format!("\"{platform}\""));
            assert_eq!(platform.to_string(), platform.as_str());
        }
        assert_eq!(Platform::Ios.to_string(), "ios");
    }

    #[test]
    fn unavailable_target_never_links() {
        let target = DownloadTarget {
            available: false,
            download_url: Some("https://example.com/app.apk".into()),
            ..Default::default()
        };
        assert_eq!(target.link(), None);

        let live = DownloadTarget {
            available: true,
            ..target
        };
        assert_eq!(live.link(), Some("https://example.com/app.apk"));
    }

    #[test]
    fn unknown_showcase_feature_has_no_benefits() {
        let content = SiteContent {
            features: vec![Feature {
                id: "mobile-ticketing".into(),
                benefits: vec!["Instant QR code tickets".into()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let known = Showcase {
            feature_id: "mobile-ticketing".into(),
            ..Default::default()
        };
        let unknown = Showcase {
            feature_id: "teleportation".into(),
            ..Default::default()
        };

        assert_eq!(content.benefits_for(&known), vec!["Instant QR code tickets"]);
        assert!(content.benefits_for(&unknown).is_empty());
    }
}
