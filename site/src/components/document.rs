//! Root document component - the complete HTML page

use super::{DownloadSection, FeaturesSection, Hero, ScreenshotsSection, SiteFooter, SiteHeader};
use crate::styles::{CSP, SITE_CSS};
use crate::types::SiteContent;
use crate::{RenderOptions, Stylesheet};
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn SiteDocument(content: SiteContent, options: RenderOptions) -> impl IntoView {
    let footer_features = content
        .features
        .iter()
        .map(|f| f.name.clone())
        .collect::<Vec<_>>();
    let screenshots = content.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=options.description.clone() />
                <title>{options.title.clone()}</title>
                <PageStyles stylesheet=options.stylesheet.clone() />
            </head>
            <body>
                <div class="page">
                    <SiteHeader />
                    <main>
                        <Hero stats=content.stats hero_image=content.hero_image />
                        <FeaturesSection features=content.features />
                        <ScreenshotsSection content=screenshots />
                        <DownloadSection downloads=content.downloads />
                    </main>
                    <SiteFooter features=footer_features />
                </div>
            </body>
        </html>
    }
}

/// Inline `<style>` or a `<link>` to the external stylesheet
#[component]
fn PageStyles(stylesheet: Stylesheet) -> impl IntoView {
    match stylesheet {
        Stylesheet::Inline => view! { <style>{SITE_CSS}</style> }.into_any(),
        Stylesheet::External(href) => view! { <link rel="stylesheet" href=href /> }.into_any(),
    }
}
