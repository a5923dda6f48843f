//! Inline SVG icons.
//!
//! Outline icons use a 24x24 grid with round strokes; brand marks are filled.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "24")
/// * `filled` - Fill the path instead of stroking it (default: false)
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_LOCATION size="32" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Filled brand mark instead of an outline
    #[prop(default = false)]
    filled: bool,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let (fill, stroke) = if filled {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=fill
            stroke=stroke
            viewBox="0 0 24 24"
            class=class
            aria-hidden="true"
        >
            <path d=path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"></path>
        </svg>
    }
}

/// Resolve a feature icon key to its path data.
///
/// Unknown keys get [`ICON_DOT`] so a typo in content never breaks a card.
pub fn feature_icon(key: &str) -> &'static str {
    match key {
        "location" => ICON_LOCATION,
        "ticket" => ICON_TICKET,
        "analytics" => ICON_ANALYTICS,
        _ => ICON_DOT,
    }
}

/// Brand mark for a download platform.
pub fn platform_icon(platform: crate::types::Platform) -> &'static str {
    match platform {
        crate::types::Platform::Android => ICON_ANDROID,
        crate::types::Platform::Ios => ICON_APPLE,
    }
}

// =============================================================================
// Outline icons (24x24, stroke)
// =============================================================================

/// Two opposing arrows - SmartBus logo
pub const ICON_SWAP: &str = "M8 7h12m0 0l-4-4m4 4l-4 4m0 6H4m0 0l4 4m-4-4l4-4";

/// Map pin - real-time tracking
pub const ICON_LOCATION: &str = "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0zM15 11a3 3 0 11-6 0 3 3 0 016 0z";

/// Card - mobile ticketing
pub const ICON_TICKET: &str = "M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z";

/// Bar chart - route optimisation
pub const ICON_ANALYTICS: &str = "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z";

/// Check mark - benefit bullets
pub const ICON_CHECK: &str = "M5 13l4 4L19 7";

/// Plain circle - fallback
pub const ICON_DOT: &str = "M12 8a4 4 0 100 8 4 4 0 000-8z";

// =============================================================================
// Brand marks (24x24, fill)
// =============================================================================

/// Android
pub const ICON_ANDROID: &str = "M17.523 15.3414c-.5511 0-.9993-.4482-.9993-.9993s.4482-.9993.9993-.9993.9993.4482.9993.9993-.4482.9993-.9993.9993zm-11.046 0c-.5511 0-.9993-.4482-.9993-.9993s.4482-.9993.9993-.9993.9993.4482.9993.9993-.4482.9993-.9993.9993zM23.52 2.868l-6.967 8.169c-.339.398-.835.626-1.355.626H3.808c-.83 0-1.336-.932-.864-1.59L8.93 2.868c.145-.203.378-.325.626-.325h13.338c.83 0 1.336.932.626 1.325z";

/// Apple
pub const ICON_APPLE: &str = "M18.71 19.5c-.83 1.24-1.71 2.45-3.05 2.47-1.34.03-1.77-.79-3.29-.79-1.53 0-2 .77-3.27.82-1.31.05-2.3-1.32-3.14-2.53C4.25 17 2.94 12.45 4.7 9.39c.87-1.52 2.43-2.48 4.12-2.51 1.28-.02 2.5.87 3.29.87.78 0 2.26-1.07 3.81-.91.65.03 2.47.26 3.64 1.98-.09.06-2.17 1.28-2.15 3.81.03 3.02 2.65 4.03 2.68 4.04-.03.07-.42 1.44-1.38 2.83M13 3.5c.73-.83 1.94-1.46 2.94-1.5.13 1.17-.34 2.35-1.04 3.19-.69.85-1.83 1.51-2.95 1.42-.15-1.15.41-2.35 1.05-3.11z";

/// Bird
pub const ICON_TWITTER: &str = "M24 4.557c-.883.392-1.832.656-2.828.775 1.017-.609 1.798-1.574 2.165-2.724-.951.564-2.005.974-3.127 1.195-.897-.957-2.178-1.555-3.594-1.555-3.179 0-5.515 2.966-4.797 6.045-4.091-.205-7.719-2.165-10.148-5.144-1.29 2.213-.669 5.108 1.523 6.574-.806-.026-1.566-.247-2.229-.616-.054 2.281 1.581 4.415 3.949 4.89-.693.188-1.452.232-2.224.084.626 1.956 2.444 3.379 4.6 3.419-2.07 1.623-4.678 2.348-7.29 2.04 2.179 1.397 4.768 2.212 7.548 2.212 9.142 0 14.307-7.721 13.995-14.646.962-.695 1.797-1.562 2.457-2.549z";

/// Speech bubble
pub const ICON_CHAT: &str = "M8 10h.01M12 10h.01M16 10h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;

    #[test]
    fn known_feature_keys_resolve() {
        assert_eq!(feature_icon("location"), ICON_LOCATION);
        assert_eq!(feature_icon("ticket"), ICON_TICKET);
        assert_eq!(feature_icon("analytics"), ICON_ANALYTICS);
    }

    #[test]
    fn unknown_feature_key_falls_back() {
        assert_eq!(feature_icon("hoverboard"), ICON_DOT);
        assert_eq!(feature_icon(""), ICON_DOT);
    }

    #[test]
    fn platforms_have_distinct_marks() {
        assert_ne!(platform_icon(Platform::Android), platform_icon(Platform::Ios));
    }
}
