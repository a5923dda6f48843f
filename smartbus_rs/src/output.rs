//! Writing the rendered page to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use smartbus_site::styles::SITE_CSS;
use smartbus_site::{render_site, RenderOptions, Stylesheet};
use tracing::{debug, info, warn};

use crate::config::STYLESHEET_FILE;
use crate::store::{ContentError, ContentStore};
use crate::validate::validate;

/// Name of the generated page.
pub const INDEX_FILE: &str = "index.html";

/// Everything one build needs.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub content: ContentStore,
    pub options: RenderOptions,
    pub output_dir: PathBuf,
}

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub index: PathBuf,
    pub stylesheet: Option<PathBuf>,
    pub html_bytes: usize,
}

/// Validate, render and write the page.
///
/// Invalid content aborts before anything is written.
pub fn build_site(plan: &BuildPlan) -> Result<BuildSummary> {
    let issues = validate(&plan.content);
    if !issues.is_empty() {
        for issue in &issues {
            warn!("{}", issue);
        }
        return Err(ContentError::Invalid(issues)).context("refusing to build invalid content");
    }

    let html = render_site(&plan.content.site_content(), &plan.options);
    debug!(bytes = html.len(), "rendered page");

    fs::create_dir_all(&plan.output_dir)
        .with_context(|| format!("failed to create {}", plan.output_dir.display()))?;

    let index = plan.output_dir.join(INDEX_FILE);
    write_file(&index, &html)?;

    let stylesheet = match &plan.options.stylesheet {
        Stylesheet::External(_) => {
            let path = plan.output_dir.join(STYLESHEET_FILE);
            write_file(&path, SITE_CSS.trim_start())?;
            Some(path)
        }
        Stylesheet::Inline => None,
    };

    info!("wrote {} ({} bytes)", index.display(), html.len());

    Ok(BuildSummary {
        index,
        stylesheet,
        html_bytes: html.len(),
    })
}

fn write_file(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}
