//! Sticky header with logo and in-page navigation

use super::{Icon, ICON_SWAP};
use crate::NAV_SECTIONS;
use leptos::prelude::*;

/// Page header. Nav links are generated from [`NAV_SECTIONS`] so they always
/// match the section ids.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#" class="brand">
                    <span class="brand-mark">
                        <Icon path=ICON_SWAP />
                    </span>
                    <span class="brand-name">"SmartBus"</span>
                </a>
                <nav class="site-nav">
                    {NAV_SECTIONS.iter().map(|(anchor, label)| {
                        view! {
                            <a href=format!("#{}", anchor) class="nav-link">{*label}</a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}
