//! Features section (#features)

use super::{feature_icon, Icon};
use crate::types::Feature;
use crate::SECTION_FEATURES;
use leptos::prelude::*;

/// Card accents, cycled by position.
const ACCENTS: [&str; 3] = ["accent-blue", "accent-green", "accent-purple"];

/// CSS accent class for the card at `idx`.
pub(crate) fn accent_for(idx: usize) -> &'static str {
    ACCENTS[idx % ACCENTS.len()]
}

/// Grid of feature cards
#[component]
pub fn FeaturesSection(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section id=SECTION_FEATURES class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Powerful Features"</h2>
                    <p class="section-description">
                        "Experience the complete smart transportation solution with features designed "
                        "for both passengers and transport operators."
                    </p>
                </div>
                <div class="features-grid">
                    {features.into_iter().enumerate().map(|(idx, feature)| view! {
                        <FeatureCard feature=feature accent=accent_for(idx) />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// A single feature: icon, name and pitch
#[component]
pub fn FeatureCard(feature: Feature, accent: &'static str) -> impl IntoView {
    let icon = feature_icon(&feature.icon);

    view! {
        <article class="feature-card" data-feature=feature.id>
            <div class=format!("feature-icon {}", accent)>
                <Icon path=icon size="32" />
            </div>
            <h3 class="feature-title">{feature.name}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
