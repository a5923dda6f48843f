//! Hero section and headline stats

use crate::types::{Image, Stat};
use crate::{SECTION_DOWNLOAD, SECTION_SCREENSHOTS};
use leptos::prelude::*;

/// Headline, call-to-action buttons, stats and hero image
#[component]
pub fn Hero(stats: Vec<Stat>, hero_image: Option<Image>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">
                        "The Future of "
                        <span class="hero-title-accent">"Public Transport"</span>
                    </h1>
                    <p class="hero-description">
                        "Transform your daily commute with real-time tracking, seamless mobile ticketing, "
                        "and intelligent route planning. Experience public transportation like never before."
                    </p>
                    <div class="hero-actions">
                        <a href=format!("#{}", SECTION_DOWNLOAD) class="btn btn-primary">"Download Now"</a>
                        <a href=format!("#{}", SECTION_SCREENSHOTS) class="btn btn-secondary">"Watch Demo"</a>
                    </div>
                    <StatsPanel stats=stats />
                </div>
                {hero_image.map(|image| view! {
                    <div class="hero-visual">
                        <img class="hero-image" src=image.src alt=image.alt />
                        <div class="hero-live-badge">
                            <span class="live-dot"></span>
                            "Live Tracking Active"
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}

/// Row of headline figures; renders nothing for an empty list
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn StatsPanel(stats: Vec<Stat>) -> impl IntoView {
    if stats.is_empty() {
        return view! {}.into_any();
    }

    view! {
        <div class="hero-stats">
            {stats.into_iter().map(|stat| view! {
                <div class="hero-stat">
                    <div class="hero-stat-value">{stat.value}</div>
                    <div class="hero-stat-label">{stat.label}</div>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }.into_any()
}
