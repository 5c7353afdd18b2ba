//! Recursive discovery of component files below the scan root.
//!
//! # Design
//! - Walk order is the platform's directory enumeration order; nothing is sorted here.
//! - Symlinks are followed, so a link cycle surfaces as a walk error.
//! - The first traversal error aborts the scan; there is no per-entry recovery.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{CatalogError, Result};
use crate::model::ComponentPath;

/// Collect every file below `root` whose name ends with `extension`.
///
/// # Errors
///
/// Returns an error if the root is missing or not a directory, or if any entry
/// cannot be read during traversal.
pub fn scan(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(CatalogError::RootMissing {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(CatalogError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|source| CatalogError::Walk {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(extension.as_bytes())
        {
            debug!(path = %entry.path().display(), "matched component file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Scan `root` and convert every match into a root-relative [`ComponentPath`].
///
/// # Errors
///
/// Propagates scan failures and rejects paths that are not valid UTF-8.
pub fn scan_components(root: &Path, extension: &str) -> Result<Vec<ComponentPath>> {
    scan(root, extension)?
        .iter()
        .map(|path| to_component_path(root, path, extension))
        .collect()
}

/// Express `path` relative to `root` as directory segments plus a component name.
///
/// # Errors
///
/// Returns an error if `path` is not below `root`, contains a non-UTF-8 segment,
/// or does not end with `extension`.
pub fn to_component_path(root: &Path, path: &Path, extension: &str) -> Result<ComponentPath> {
    let outside = || CatalogError::PathOutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };
    let relative = path.strip_prefix(root).map_err(|_| outside())?;

    let mut segments = Vec::new();
    for component in relative.components() {
        let Component::Normal(segment) = component else {
            return Err(outside());
        };
        let segment = segment.to_str().ok_or_else(|| CatalogError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        segments.push(segment);
    }

    ComponentPath::parse(&segments.join("/"), extension).ok_or_else(outside)
}
