//! Run configuration for the catalog builder.
//!
//! # Design
//! - Paths and the matched extension are passed in explicitly; nothing is read from globals.
//! - Defaults reproduce the fixed layout used by the component export pipeline.

use std::path::PathBuf;

/// Default scan root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "output/components";
/// Default catalog file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "components-catalog.json";
/// Default component file suffix (matched case-sensitively).
pub const DEFAULT_EXTENSION: &str = ".html";

/// Inputs for a single catalog run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory scanned for component files.
    pub root: PathBuf,
    /// Destination of the JSON catalog.
    pub output: PathBuf,
    /// File name suffix identifying component files, including the leading dot.
    pub extension: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}
