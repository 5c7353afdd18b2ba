#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Component catalog core: scans a tree of HTML component files and emits a
//! hierarchical JSON index consumed by retrieval tooling.
//!
//! # Design
//! - Pure library surface (`run`) used by the thin CLI entrypoint.
//! - Scanning feeds building; building takes an in-memory listing so it can be
//!   exercised without touching the filesystem.
//! - Any filesystem failure aborts the run before the output file is written.

use chrono::Utc;
use tracing::info;

use crate::error::Result;

pub mod build;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod scan;

pub use build::build_catalog;
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use model::{Catalog, CatalogMeta, CatalogNode, ComponentPath};
pub use output::{render_breakdown, write_catalog};
pub use scan::{scan, scan_components};

/// Scan the configured root, build the catalog, and write it to the configured output.
///
/// Progress lines go to stdout; structured events go through `tracing`.
///
/// # Errors
///
/// Returns an error if the root cannot be scanned, a directory collides with a
/// reserved key, or the catalog cannot be written.
pub fn run(config: &CatalogConfig) -> Result<Catalog> {
    println!("Scanning {}...", config.root.display());
    info!(root = %config.root.display(), extension = %config.extension, "scanning components");

    let components = scan_components(&config.root, &config.extension)?;
    println!("Found {} components", components.len());

    let source = config.root.display().to_string();
    let catalog = build_catalog(&components, &source, Utc::now())?;

    write_catalog(&catalog, &config.output)?;
    println!("Written to {}", config.output.display());
    println!();
    print!("{}", render_breakdown(&catalog.meta.categories));

    Ok(catalog)
}
