//! Page footer

use super::{Icon, ICON_CHAT, ICON_SWAP, ICON_TWITTER};
use leptos::prelude::*;

const SUPPORT_LINKS: [&str; 4] = ["Help Center", "Contact Us", "Privacy Policy", "Terms of Service"];

/// Footer with brand blurb, feature names, support links and socials
#[component]
pub fn SiteFooter(features: Vec<String>) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-mark small">
                            <Icon path=ICON_SWAP size="20" />
                        </span>
                        <span class="brand-name">"SmartBus"</span>
                    </div>
                    <p class="footer-blurb">
                        "Revolutionizing public transportation with smart technology and user-centered design."
                    </p>
                </div>
                <div class="footer-column">
                    <h4>"Features"</h4>
                    <ul>
                        {features.into_iter().map(|name| view! { <li>{name}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>"Support"</h4>
                    <ul>
                        {SUPPORT_LINKS.iter().map(|label| view! { <li>{*label}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>"Connect"</h4>
                    <div class="footer-socials">
                        <span class="social-icon" title="Twitter">
                            <Icon path=ICON_TWITTER size="20" filled=true />
                        </span>
                        <span class="social-icon" title="Community">
                            <Icon path=ICON_CHAT size="20" />
                        </span>
                    </div>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>"© 2025 SmartBus. All rights reserved. Built with ❤️ for better public transportation."</p>
            </div>
        </footer>
    }
}
