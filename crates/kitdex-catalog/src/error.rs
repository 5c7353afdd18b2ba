//! Error types for catalog scanning and writing.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building the component catalog.
///
/// Every variant aborts the run before the output file is touched.
#[derive(Debug)]
pub enum CatalogError {
    /// The scan root does not exist on disk.
    RootMissing {
        /// Missing root path.
        path: PathBuf,
    },
    /// The scan root exists but is not a directory.
    RootNotDirectory {
        /// Offending root path.
        path: PathBuf,
    },
    /// Traversal of the scan root failed.
    Walk {
        /// Entry that failed, or the root when walkdir reports no path.
        path: PathBuf,
        /// Underlying walkdir error (IO, permissions, symlink loops).
        source: walkdir::Error,
    },
    /// A discovered path could not be made relative to the root.
    PathOutsideRoot {
        /// Discovered file path.
        path: PathBuf,
        /// Scan root path.
        root: PathBuf,
    },
    /// A path segment is not valid UTF-8.
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },
    /// A directory segment collides with a reserved catalog key.
    ReservedSegment {
        /// Relative component path containing the segment.
        path: String,
        /// Reserved segment name.
        segment: String,
    },
    /// The same component was listed more than once.
    DuplicateComponent {
        /// Component identifier (relative path without extension).
        path: String,
    },
    /// Failed to serialise the catalog.
    SerializeJson {
        /// JSON error.
        source: serde_json::Error,
    },
    /// Failed to write the catalog file.
    WriteOutput {
        /// Output path.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
}

impl Display for CatalogError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootMissing { .. } => formatter.write_str("component root missing"),
            Self::RootNotDirectory { .. } => {
                formatter.write_str("component root is not a directory")
            }
            Self::Walk { .. } => formatter.write_str("failed to walk component root"),
            Self::PathOutsideRoot { .. } => {
                formatter.write_str("component path outside component root")
            }
            Self::NonUtf8Path { .. } => formatter.write_str("component path is not valid utf-8"),
            Self::ReservedSegment { .. } => {
                formatter.write_str("directory name collides with a reserved catalog key")
            }
            Self::DuplicateComponent { .. } => formatter.write_str("component listed twice"),
            Self::SerializeJson { .. } => formatter.write_str("failed to serialise catalog"),
            Self::WriteOutput { .. } => formatter.write_str("failed to write catalog file"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Walk { source, .. } => Some(source),
            Self::SerializeJson { source } => Some(source),
            Self::WriteOutput { source, .. } => Some(source),
            Self::RootMissing { .. }
            | Self::RootNotDirectory { .. }
            | Self::PathOutsideRoot { .. }
            | Self::NonUtf8Path { .. }
            | Self::ReservedSegment { .. }
            | Self::DuplicateComponent { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::Error as _;
    use std::io;

    fn json_error() -> serde_json::Error {
        match serde_json::from_str::<serde_json::Value>("invalid") {
            Ok(_) => serde_json::Error::custom("expected invalid json"),
            Err(err) => err,
        }
    }

    fn walk_error() -> std::result::Result<walkdir::Error, Box<dyn Error>> {
        let missing = std::env::temp_dir().join(format!(
            "kitdex-missing-walk-root-{}",
            std::process::id()
        ));
        walkdir::WalkDir::new(&missing)
            .into_iter()
            .find_map(std::result::Result::err)
            .ok_or_else(|| io::Error::other("expected walk error").into())
    }

    fn assert_error(err: &CatalogError, message: &str, has_source: bool) {
        assert_eq!(err.to_string(), message);
        assert_eq!(err.source().is_some(), has_source);
    }

    #[test]
    fn catalog_error_display_without_source() {
        assert_error(
            &CatalogError::RootMissing {
                path: PathBuf::from("output/components"),
            },
            "component root missing",
            false,
        );
        assert_error(
            &CatalogError::RootNotDirectory {
                path: PathBuf::from("components.html"),
            },
            "component root is not a directory",
            false,
        );
        assert_error(
            &CatalogError::PathOutsideRoot {
                path: PathBuf::from("elsewhere/card.html"),
                root: PathBuf::from("output/components"),
            },
            "component path outside component root",
            false,
        );
        assert_error(
            &CatalogError::NonUtf8Path {
                path: PathBuf::from("cards"),
            },
            "component path is not valid utf-8",
            false,
        );
        assert_error(
            &CatalogError::ReservedSegment {
                path: "_flat/card.html".to_string(),
                segment: "_flat".to_string(),
            },
            "directory name collides with a reserved catalog key",
            false,
        );
        assert_error(
            &CatalogError::DuplicateComponent {
                path: "forms/input".to_string(),
            },
            "component listed twice",
            false,
        );
    }

    #[test]
    fn catalog_error_display_with_source() -> std::result::Result<(), Box<dyn Error>> {
        assert_error(
            &CatalogError::Walk {
                path: PathBuf::from("output/components"),
                source: walk_error()?,
            },
            "failed to walk component root",
            true,
        );
        assert_error(
            &CatalogError::SerializeJson {
                source: json_error(),
            },
            "failed to serialise catalog",
            true,
        );
        assert_error(
            &CatalogError::WriteOutput {
                path: PathBuf::from("components-catalog.json"),
                source: io::Error::other("io"),
            },
            "failed to write catalog file",
            true,
        );
        Ok(())
    }
}
