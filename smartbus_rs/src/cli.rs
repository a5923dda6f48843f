//! Command-line interface: argument types and command handlers.
//!
//! stdout carries command output (paths, JSON); logs go to stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::SiteConfig;
use crate::output::{build_site, BuildPlan};
use crate::store::{ContentStore, RecordKind};
use crate::validate::validate;

#[derive(Parser, Debug)]
#[command(name = "smartbus")]
#[command(about = "Build the SmartBus landing page from its content records")]
#[command(version)]
pub struct Args {
    /// Project root (holds .smartbus/config.toml)
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate content, render the page and write it to the output directory
    Build {
        /// Output directory (default: build.output_dir from config, then "dist")
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Content file to use instead of the configured or built-in records
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Write styles.css and link it instead of inlining the CSS
        #[arg(long)]
        external_css: bool,
    },

    /// Print one content record as JSON
    Content {
        /// Record to print
        #[arg(value_enum)]
        record: RecordKind,

        /// Content file to read instead of the configured or built-in records
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check content invariants; exits non-zero when any issue is found
    Check {
        /// Content file to check instead of the configured or built-in records
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
}

/// Run a parsed command, writing command output to `out`.
pub fn run(args: Args, out: &mut dyn Write) -> Result<()> {
    let config = SiteConfig::load(&args.root);

    match args.command {
        Command::Build {
            out: output_dir,
            content,
            external_css,
        } => {
            let store = load_store(&args.root, &config, content)?;
            let plan = BuildPlan {
                content: store,
                options: config.render_options(external_css),
                output_dir: output_dir.unwrap_or_else(|| config.output_dir(&args.root)),
            };
            let summary = build_site(&plan)?;
            if let Some(css) = &summary.stylesheet {
                info!("stylesheet: {}", css.display());
            }
            writeln!(out, "{}", summary.index.display())?;
        }
        Command::Content {
            record,
            content,
            compact,
        } => {
            let store = load_store(&args.root, &config, content)?;
            let payload = store.payload(record);
            let json = if compact {
                serde_json::to_string(&payload)?
            } else {
                serde_json::to_string_pretty(&payload)?
            };
            writeln!(out, "{}", json)?;
        }
        Command::Check { content } => {
            let store = load_store(&args.root, &config, content)?;
            let issues = validate(&store);
            if !issues.is_empty() {
                for issue in &issues {
                    writeln!(out, "error: {}", issue)?;
                }
                bail!("content check failed with {} issue(s)", issues.len());
            }
            writeln!(out, "content ok")?;
        }
    }

    Ok(())
}

/// Flag beats config beats built-in records.
fn load_store(
    root: &std::path::Path,
    config: &SiteConfig,
    flag: Option<PathBuf>,
) -> Result<ContentStore> {
    let path = flag.or_else(|| config.content_path(root));
    let store = ContentStore::resolve(path.as_deref()).context("failed to load content")?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(argv: &[&str]) -> (Result<()>, String) {
        let args = Args::try_parse_from(argv).expect("valid arguments");
        let mut out = Vec::new();
        let result = run(args, &mut out);
        (result, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn parses_record_names() {
        let args = Args::try_parse_from(["smartbus", "content", "download-info"]).expect("parse");
        assert!(matches!(
            args.command,
            Command::Content {
                record: RecordKind::DownloadInfo,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_record() {
        assert!(Args::try_parse_from(["smartbus", "content", "tickets"]).is_err());
    }

    #[test]
    fn content_prints_compact_stats() {
        let (result, stdout) = run_args(&["smartbus", "content", "stats", "--compact"]);
        result.expect("content command");
        assert!(stdout.starts_with("{\"daily_users\":\"50K+\""));
        assert_eq!(stdout.lines().count(), 1);
    }

    #[test]
    fn check_builtin_is_ok() {
        let (result, stdout) = run_args(&["smartbus", "check"]);
        result.expect("check command");
        assert_eq!(stdout.trim(), "content ok");
    }
}
