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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Thin CLI entrypoint that delegates to the library implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kitdex_catalog::{CatalogConfig, config, run};
use kitdex_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};

#[derive(Parser)]
#[command(
    name = "kitdex",
    about = "Index a tree of HTML components into a JSON catalog"
)]
struct Cli {
    #[arg(long, env = "KITDEX_ROOT", default_value = config::DEFAULT_ROOT)]
    root: PathBuf,
    #[arg(long, env = "KITDEX_OUTPUT", default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,
    #[arg(long, env = "KITDEX_EXTENSION", default_value = config::DEFAULT_EXTENSION)]
    extension: String,
    #[arg(long, env = "KITDEX_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[arg(long, env = "KITDEX_LOG_FORMAT", help = "Log format: pretty or json")]
    log_format: Option<String>,
}

/// Entry point for generating the component catalog.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        level: &cli.log_level,
        format: cli
            .log_format
            .as_deref()
            .map_or_else(LogFormat::infer, LogFormat::from_name),
    })?;

    let config = CatalogConfig {
        root: cli.root,
        output: cli.output,
        extension: cli.extension,
    };
    run(&config).with_context(|| {
        format!(
            "failed to catalog components under {}",
            config.root.display()
        )
    })?;
    Ok(())
}
