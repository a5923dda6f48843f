//! Configuration file support for smartbus.
//!
//! Loads optional `.smartbus/config.toml` from the project root.

use serde::Deserialize;
use smartbus_site::{RenderOptions, Stylesheet};
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name of the external stylesheet written next to `index.html`.
pub const STYLESHEET_FILE: &str = "styles.css";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub build: BuildSection,
}

/// Page metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// `<title>` of the page
    pub title: String,
    /// Meta description
    pub description: String,
    /// Write `styles.css` and link it instead of inlining the CSS
    pub external_css: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        let defaults = RenderOptions::default();
        Self {
            title: defaults.title,
            description: defaults.description,
            external_css: false,
        }
    }
}

/// Output and input locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Directory receiving `index.html`, relative to the project root
    pub output_dir: PathBuf,
    /// Content file replacing the built-in records, relative to the project root
    pub content: Option<PathBuf>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            content: None,
        }
    }
}

impl SiteConfig {
    /// Load config from `.smartbus/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".smartbus").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Renderer settings; `external_css` forces a linked stylesheet.
    pub fn render_options(&self, external_css: bool) -> RenderOptions {
        let stylesheet = if external_css || self.site.external_css {
            Stylesheet::External(STYLESHEET_FILE.to_string())
        } else {
            Stylesheet::Inline
        };
        RenderOptions {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            stylesheet,
        }
    }

    /// Content file resolved against `root`, if configured.
    pub fn content_path(&self, root: &Path) -> Option<PathBuf> {
        self.build.content.as_ref().map(|p| root.join(p))
    }

    /// Output directory resolved against `root`.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.build.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: &str) {
        let dir = temp.path().join(".smartbus");
        std::fs::create_dir_all(&dir).expect("create .smartbus");
        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        write!(file, "{}", body).expect("write config");
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, RenderOptions::default().title);
        assert!(!config.site.external_css);
        assert_eq!(config.build.output_dir, PathBuf::from("dist"));
        assert!(config.build.content.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path());
        assert_eq!(config.build.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
[site]
title = "SmartBus Beta"
external_css = true

[build]
output_dir = "public"
content = "content/site.json"
"#,
        );

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.site.title, "SmartBus Beta");
        assert_eq!(config.site.description, RenderOptions::default().description);
        assert!(config.site.external_css);
        assert_eq!(config.output_dir(temp.path()), temp.path().join("public"));
        assert_eq!(
            config.content_path(temp.path()),
            Some(temp.path().join("content/site.json"))
        );
    }

    #[test]
    fn test_load_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[site\ntitle = ");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.site.title, RenderOptions::default().title);
    }

    #[test]
    fn test_render_options_stylesheet() {
        let config = SiteConfig::default();
        assert_eq!(config.render_options(false).stylesheet, Stylesheet::Inline);
        assert_eq!(
            config.render_options(true).stylesheet,
            Stylesheet::External(STYLESHEET_FILE.into())
        );
    }
}
