//! Screenshots section (#screenshots)
//!
//! One row per showcase; rows alternate which side the screenshot sits on.

use super::features::accent_for;
use super::{feature_icon, Icon, ICON_CHECK};
use crate::types::{Showcase, SiteContent};
use crate::SECTION_SCREENSHOTS;
use leptos::prelude::*;

/// All showcase rows with the section heading
#[component]
pub fn ScreenshotsSection(content: SiteContent) -> impl IntoView {
    let rows = content
        .showcases
        .iter()
        .enumerate()
        .map(|(idx, showcase)| {
            let icon = content
                .feature(&showcase.feature_id)
                .map(|f| f.icon.as_str())
                .unwrap_or_default();
            let icon = feature_icon(icon);
            let benefits = content.benefits_for(showcase);
            view! {
                <ShowcaseRow
                    showcase=showcase.clone()
                    benefits=benefits
                    icon=icon
                    accent=accent_for(idx)
                    reversed=idx % 2 == 1
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=SECTION_SCREENSHOTS class="screenshots">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"See It In Action"</h2>
                    <p class="section-description">
                        "Experience the intuitive interface and powerful features that make public transport effortless."
                    </p>
                </div>
                {rows}
            </div>
        </section>
    }
}

/// Copy, benefit bullets and screenshot for one feature
#[component]
pub fn ShowcaseRow(
    showcase: Showcase,
    /// Bullets taken from the referenced feature
    benefits: Vec<String>,
    icon: &'static str,
    accent: &'static str,
    /// Put the screenshot on the left
    #[prop(default = false)]
    reversed: bool,
) -> impl IntoView {
    let row_class = if reversed { "showcase reversed" } else { "showcase" };

    view! {
        <div class=row_class>
            <div class="showcase-copy">
                <div class="showcase-heading">
                    <span class=format!("showcase-icon {}", accent)>
                        <Icon path=icon size="16" />
                    </span>
                    <h3>{showcase.title}</h3>
                </div>
                <p class="showcase-description">{showcase.description}</p>
                <ul class="benefit-list">
                    {benefits.into_iter().map(|benefit| view! {
                        <li class="benefit">
                            <Icon path=ICON_CHECK size="20" class="benefit-check" />
                            <span>{benefit}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
            <div class="showcase-visual">
                <img class="showcase-image" src=showcase.image.src alt=showcase.image.alt />
                <span class=format!("showcase-badge {}", accent)>{showcase.badge}</span>
            </div>
        </div>
    }
}
