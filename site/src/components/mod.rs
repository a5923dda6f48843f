//! Leptos UI components for rendering the landing page.
//!
//! Each page section is a `#[component]` function that receives its slice of
//! [`crate::types::SiteContent`] as props.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── SiteHeader (logo + in-page nav)
//! ├── Hero
//! │   └── StatsPanel
//! ├── FeaturesSection (#features)
//! │   └── FeatureCard (per feature)
//! ├── ScreenshotsSection (#screenshots)
//! │   └── ShowcaseRow (per showcase)
//! ├── DownloadSection (#download)
//! │   └── DownloadCard (per platform)
//! └── SiteFooter
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_site`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use smartbus_site::components::{FeaturesSection, StatsPanel};
//!
//! view! {
//!     <StatsPanel stats=content.stats.clone() />
//!     <FeaturesSection features=content.features.clone() />
//! }
//! ```

mod document;
mod download;
mod features;
mod footer;
mod header;
mod hero;
mod icons;
mod screenshots;

pub use document::SiteDocument;
pub use download::{DownloadCard, DownloadSection};
pub use features::{FeatureCard, FeaturesSection};
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::{Hero, StatsPanel};
pub use icons::*;
pub use screenshots::{ScreenshotsSection, ShowcaseRow};
