//! The content store: every named record the site and its tooling read.
//!
//! Records are created once (from the built-in fixtures or a JSON file) and
//! never mutated. The page renderer does not see the store directly; it gets a
//! [`SiteContent`] from [`ContentStore::site_content`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smartbus_site::types::{DownloadTarget, Feature, Image, Platform, Showcase, SiteContent, Stat};
use thiserror::Error;
use tracing::{debug, info};

use crate::fixtures;
use crate::transit::{Bus, Route};
use crate::validate::ContentIssue;

/// Errors raised while loading or exporting content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("content has {} issue(s)", .0.len())]
    Invalid(Vec<ContentIssue>),
}

/// Service status record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    pub status: String,
    pub message: String,
}

/// Platform-wide figures, already formatted for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStats {
    pub daily_users: String,
    pub on_time_performance: String,
    pub routes_covered: String,
    pub total_trips: String,
    pub cities_served: String,
    pub user_satisfaction: String,
}

impl PlatformStats {
    /// The three figures shown in the hero panel, blanks skipped.
    pub fn headline(&self) -> Vec<Stat> {
        labelled(&[
            ("Daily Users", &self.daily_users),
            ("On-Time Performance", &self.on_time_performance),
            ("Routes Covered", &self.routes_covered),
        ])
    }

    /// Every figure, blanks skipped.
    pub fn all(&self) -> Vec<Stat> {
        labelled(&[
            ("Daily Users", &self.daily_users),
            ("On-Time Performance", &self.on_time_performance),
            ("Routes Covered", &self.routes_covered),
            ("Total Trips", &self.total_trips),
            ("Cities Served", &self.cities_served),
            ("User Satisfaction", &self.user_satisfaction),
        ])
    }
}

fn labelled(pairs: &[(&str, &String)]) -> Vec<Stat> {
    pairs
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| Stat::new(*label, value.as_str()))
        .collect()
}

/// Which record `payload` should export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordKind {
    Health,
    Stats,
    Features,
    Showcases,
    DownloadInfo,
    Buses,
    Routes,
    /// The whole store, in the content file format
    All,
}

/// One exported record, borrowed from the store.
///
/// Serializes in field declaration order. List records are wrapped in an
/// object keyed by their name (`{"features": [...]}`); `health`, `stats` and
/// `download_info` are bare objects.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload<'a> {
    Health(&'a Health),
    Stats(&'a PlatformStats),
    Features { features: &'a [Feature] },
    Showcases { showcases: &'a [Showcase] },
    DownloadInfo(&'a BTreeMap<Platform, DownloadTarget>),
    Buses { buses: &'a [Bus] },
    Routes { routes: &'a [Route] },
    All(&'a ContentStore),
}

/// All content records.
///
/// Missing records in a content file fall back to empty values, so a file
/// with only `features` is valid input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStore {
    pub health: Health,
    pub stats: PlatformStats,
    pub features: Vec<Feature>,
    pub showcases: Vec<Showcase>,
    pub download_info: BTreeMap<Platform, DownloadTarget>,
    pub nearby_buses: Vec<Bus>,
    pub routes: Vec<Route>,
    pub hero_image: Option<Image>,
}

impl ContentStore {
    /// The records the site ships with.
    pub fn builtin() -> Self {
        fixtures::builtin()
    }

    /// Load records from a JSON content file.
    pub fn load_from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store: Self = serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            features = store.features.len(),
            showcases = store.showcases.len(),
            downloads = store.download_info.len(),
            "loaded content file"
        );
        Ok(store)
    }

    /// Content file when given, built-in records otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => {
                info!("using content from {}", path.display());
                Self::load_from_path(path)
            }
            None => {
                debug!("using built-in content");
                Ok(Self::builtin())
            }
        }
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn stats(&self) -> &PlatformStats {
        &self.stats
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn showcases(&self) -> &[Showcase] {
        &self.showcases
    }

    pub fn download_info(&self) -> &BTreeMap<Platform, DownloadTarget> {
        &self.download_info
    }

    pub fn nearby_buses(&self) -> &[Bus] {
        &self.nearby_buses
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Export payload of one record. `All` yields the content file format.
    pub fn payload(&self, kind: RecordKind) -> Payload<'_> {
        match kind {
            RecordKind::Health => Payload::Health(&self.health),
            RecordKind::Stats => Payload::Stats(&self.stats),
            RecordKind::Features => Payload::Features {
                features: &self.features,
            },
            RecordKind::Showcases => Payload::Showcases {
                showcases: &self.showcases,
            },
            RecordKind::DownloadInfo => Payload::DownloadInfo(&self.download_info),
            RecordKind::Buses => Payload::Buses {
                buses: &self.nearby_buses,
            },
            RecordKind::Routes => Payload::Routes {
                routes: &self.routes,
            },
            RecordKind::All => Payload::All(self),
        }
    }

    /// Bind the records the page shows into renderer input.
    pub fn site_content(&self) -> SiteContent {
        SiteContent {
            stats: self.stats.headline(),
            features: self.features.clone(),
            showcases: self.showcases.clone(),
            downloads: self.download_info.clone(),
            hero_image: self.hero_image.clone(),
        }
    }
}
