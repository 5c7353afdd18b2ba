//! Catalog persistence and the human-readable run summary.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CatalogError, Result};
use crate::model::Catalog;

/// Serialise `catalog` as pretty JSON (two-space indent) and write it to `output`.
///
/// The file is only touched once serialisation has succeeded.
///
/// # Errors
///
/// Returns an error if serialisation fails or the file cannot be written.
pub fn write_catalog(catalog: &Catalog, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)
        .map_err(|source| CatalogError::SerializeJson { source })?;
    fs::write(output, json).map_err(|source| CatalogError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    info!(output = %output.display(), "catalog written");
    Ok(())
}

/// Render the per-category summary printed after a run, sorted by category.
#[must_use]
pub fn render_breakdown(categories: &BTreeMap<String, usize>) -> String {
    let mut rendered = String::from("Category breakdown:\n");
    for (category, count) in categories {
        let _ = writeln!(rendered, "  {category}: {count} components");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogMeta, CatalogNode};
    use std::error::Error;
    use tempfile::TempDir;

    fn sample() -> Catalog {
        Catalog {
            meta: CatalogMeta {
                generated: "2024-01-01T00:00:00.000Z".to_string(),
                total_components: 1,
                source: "output/components".to_string(),
                categories: BTreeMap::from([("forms".to_string(), 1)]),
            },
            tree: BTreeMap::from([(
                "forms".to_string(),
                CatalogNode::Leaf(vec!["input".to_string()]),
            )]),
            root_components: None,
            flat: vec!["forms/input".to_string()],
        }
    }

    #[test]
    fn write_catalog_uses_two_space_indent() -> std::result::Result<(), Box<dyn Error>> {
        let temp = TempDir::new()?;
        let output = temp.path().join("components-catalog.json");

        write_catalog(&sample(), &output)?;

        let written = fs::read_to_string(&output)?;
        assert!(written.starts_with("{\n  \"_meta\": {\n    \"generated\""));
        assert!(written.contains("\n  \"forms\": [\n    \"input\"\n  ],"));
        assert!(written.ends_with("\n  ]\n}"));
        Ok(())
    }

    #[test]
    fn write_catalog_reports_unwritable_output() -> std::result::Result<(), Box<dyn Error>> {
        let temp = TempDir::new()?;
        let output = temp.path().join("missing-dir/components-catalog.json");

        let error = write_catalog(&sample(), &output)
            .err()
            .ok_or_else(|| std::io::Error::other("write into missing dir should fail"))?;
        assert!(matches!(error, CatalogError::WriteOutput { .. }));
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn render_breakdown_sorts_categories() {
        let categories = BTreeMap::from([
            ("forms".to_string(), 1),
            ("buttons".to_string(), 2),
        ]);
        assert_eq!(
            render_breakdown(&categories),
            "Category breakdown:\n  buttons: 2 components\n  forms: 1 components\n"
        );
    }

    #[test]
    fn render_breakdown_handles_empty_catalog() {
        assert_eq!(render_breakdown(&BTreeMap::new()), "Category breakdown:\n");
    }
}
