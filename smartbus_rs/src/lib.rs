//! # smartbus
//!
//! Content store and static site builder for the SmartBus landing page.
//!
//! The page itself is rendered by [`smartbus_site`]; this crate owns the
//! records behind it and the tooling around them:
//!
//! - **Content store** - built-in records or a JSON content file
//! - **Validation** - content invariants checked before every build
//! - **Binding** - [`store::ContentStore::site_content`] turns records into renderer input
//! - **Build** - writes `index.html` (and optionally `styles.css`)
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use smartbus::store::ContentStore;
//! use smartbus::validate::validate;
//! use smartbus_site::{render_site, RenderOptions};
//!
//! let store = ContentStore::builtin();
//! assert!(validate(&store).is_empty());
//!
//! let html = render_site(&store.site_content(), &RenderOptions::default());
//! assert!(html.contains("50K+"));
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! smartbus build --out dist          # Render dist/index.html
//! smartbus content features          # Print a record as JSON
//! smartbus content all > site.json   # Export an editable content file
//! smartbus check --content site.json # Validate a content file
//! ```

pub mod cli;
pub mod config;
mod fixtures;
pub mod output;
pub mod store;
pub mod transit;
pub mod validate;

pub use config::SiteConfig;
pub use output::{build_site, BuildPlan, BuildSummary};
pub use store::{ContentError, ContentStore, Payload, RecordKind};
pub use validate::{validate, ContentIssue};
