//! Download call-to-action (#download)

use std::collections::BTreeMap;

use super::{platform_icon, Icon};
use crate::types::{DownloadTarget, Platform};
use crate::SECTION_DOWNLOAD;
use leptos::prelude::*;

/// Release line under the cards, taken from the first target.
fn release_line(downloads: &BTreeMap<Platform, DownloadTarget>) -> Option<String> {
    downloads.values().next().map(|t| {
        format!(
            "Version {} • Last updated: {} • Size: {}",
            t.version, t.last_updated, t.size
        )
    })
}

/// Section with one card per platform
#[component]
pub fn DownloadSection(downloads: BTreeMap<Platform, DownloadTarget>) -> impl IntoView {
    let release = release_line(&downloads);

    view! {
        <section id=SECTION_DOWNLOAD class="download">
            <div class="container">
                <h2 class="section-title">"Download SmartBus Today"</h2>
                <p class="section-description">
                    "Join thousands of commuters who have transformed their daily travel experience. "
                    "Available for Android and iOS."
                </p>
                <div class="download-grid">
                    {downloads.into_iter().map(|(platform, target)| view! {
                        <DownloadCard platform=platform target=target />
                    }).collect::<Vec<_>>()}
                </div>
                {release.map(|line| view! { <p class="download-release">{line}</p> })}
            </div>
        </section>
    }
}

/// A platform card.
///
/// The placeholder text appears only while the target is unavailable, on a
/// disabled control. Available targets with a URL get a real link.
#[component]
pub fn DownloadCard(platform: Platform, target: DownloadTarget) -> impl IntoView {
    let control = match target.link() {
        Some(url) => {
            let label = format!("Download v{}", target.version);
            view! {
                <a class="download-btn download-link" href=url.to_string()>{label}</a>
            }
            .into_any()
        }
        None if !target.available => view! {
            <div class="download-status">"Coming Soon"</div>
            <button type="button" class="download-btn" disabled=true aria-disabled="true">
                {target.placeholder_text.clone()}
            </button>
        }
        .into_any(),
        // Marked available but nothing to link to yet
        None => view! {
            <button type="button" class="download-btn" disabled=true>
                {format!("Version {}", target.version)}
            </button>
        }
        .into_any(),
    };

    view! {
        <div class="download-card" data-platform=platform.as_str()>
            <div class="download-icon">
                <Icon path=platform_icon(platform) size="32" filled=true />
            </div>
            <h3>{platform.title()}</h3>
            <p class="download-blurb">{platform.blurb()}</p>
            <div class="download-action">{control}</div>
        </div>
    }
}
