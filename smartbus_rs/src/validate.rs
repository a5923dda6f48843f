//! Content invariants.
//!
//! `validate` never stops at the first problem; every issue is reported so a
//! content editor can fix a file in one pass.

use std::collections::HashSet;

use smartbus_site::types::Platform;
use thiserror::Error;
use tracing::debug;

use crate::store::ContentStore;

/// A single broken invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContentIssue {
    #[error("feature `{0}` has no benefits")]
    FeatureWithoutBenefits(String),

    #[error("feature id `{0}` is used more than once")]
    DuplicateFeature(String),

    #[error("{0} download is unavailable but has a download URL")]
    UnavailableWithUrl(Platform),

    #[error("{0} download is unavailable but has no placeholder text")]
    MissingPlaceholder(Platform),

    #[error("{0} download is available but has no download URL")]
    AvailableWithoutUrl(Platform),

    #[error("route `{id}` has {stops} stop(s), needs at least 2")]
    RouteTooShort { id: String, stops: usize },

    #[error("showcase `{title}` references unknown feature `{feature_id}`")]
    UnknownShowcaseFeature { title: String, feature_id: String },
}

/// Check every record and return all issues found (empty means valid).
pub fn validate(store: &ContentStore) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for feature in store.features() {
        if feature.benefits.is_empty() {
            issues.push(ContentIssue::FeatureWithoutBenefits(feature.id.clone()));
        }
        if !seen.insert(feature.id.as_str()) {
            issues.push(ContentIssue::DuplicateFeature(feature.id.clone()));
        }
    }

    for (platform, target) in store.download_info() {
        if target.available {
            if target.download_url.is_none() {
                issues.push(ContentIssue::AvailableWithoutUrl(*platform));
            }
            continue;
        }
        if target.download_url.is_some() {
            issues.push(ContentIssue::UnavailableWithUrl(*platform));
        }
        if target.placeholder_text.trim().is_empty() {
            issues.push(ContentIssue::MissingPlaceholder(*platform));
        }
    }

    for route in store.routes() {
        if route.stops.len() < 2 {
            issues.push(ContentIssue::RouteTooShort {
                id: route.id.clone(),
                stops: route.stops.len(),
            });
        }
    }

    for showcase in store.showcases() {
        if !seen.contains(showcase.feature_id.as_str()) {
            issues.push(ContentIssue::UnknownShowcaseFeature {
                title: showcase.title.clone(),
                feature_id: showcase.feature_id.clone(),
            });
        }
    }

    debug!(issues = issues.len(), "validated content");
    issues
}
