//! Catalog assembly: flat component paths to the nested, cleaned catalog.
//!
//! # Design
//! - Pass one folds paths into a draft tree in discovery order, creating nodes on demand.
//! - Pass two is a pure recursive transform from the draft to `CatalogNode`s; every call
//!   returns a fresh value and sibling subtrees share nothing.
//! - Directories that only hold components collapse to sorted name arrays.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::model::{
    COMPONENTS_KEY, Catalog, CatalogMeta, CatalogNode, ComponentPath, RESERVED_KEYS,
};

#[derive(Debug, Default)]
struct DraftNode {
    children: BTreeMap<String, DraftNode>,
    components: Vec<String>,
}

/// Build the catalog for an already-discovered set of component paths.
///
/// `source` is recorded verbatim in `_meta.source`.
///
/// # Errors
///
/// Returns [`CatalogError::ReservedSegment`] when a directory is named after a
/// reserved catalog key, and [`CatalogError::DuplicateComponent`] when the same
/// component is listed twice.
pub fn build_catalog(
    paths: &[ComponentPath],
    source: &str,
    generated: DateTime<Utc>,
) -> Result<Catalog> {
    let mut seen = BTreeSet::new();
    for path in paths {
        check_reserved(path)?;
        if !seen.insert(path) {
            return Err(CatalogError::DuplicateComponent { path: path.id() });
        }
    }

    let draft = assemble(paths);
    let (tree, root_components) = shape_children(&draft);

    let mut flat: Vec<String> = paths.iter().map(ComponentPath::id).collect();
    flat.sort_unstable();

    let categories = count_categories(paths);
    info!(
        components = flat.len(),
        categories = categories.len(),
        "catalog assembled"
    );

    Ok(Catalog {
        meta: CatalogMeta {
            generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_components: flat.len(),
            source: source.to_string(),
            categories,
        },
        tree,
        root_components,
        flat,
    })
}

fn check_reserved(path: &ComponentPath) -> Result<()> {
    match path
        .directories()
        .iter()
        .find(|segment| RESERVED_KEYS.contains(&segment.as_str()))
    {
        Some(segment) => Err(CatalogError::ReservedSegment {
            path: path.id(),
            segment: segment.clone(),
        }),
        None => Ok(()),
    }
}

fn assemble(paths: &[ComponentPath]) -> DraftNode {
    let mut root = DraftNode::default();
    for path in paths {
        let mut current = &mut root;
        for segment in path.directories() {
            current = current.children.entry(segment.clone()).or_default();
        }
        current.components.push(path.name().to_string());
    }
    root
}

fn shape(node: &DraftNode) -> CatalogNode {
    let (children, components) = shape_children(node);
    if children.is_empty() {
        CatalogNode::Leaf(components.unwrap_or_default())
    } else {
        CatalogNode::Branch {
            children,
            components,
        }
    }
}

fn shape_children(node: &DraftNode) -> (BTreeMap<String, CatalogNode>, Option<Vec<String>>) {
    let children = node
        .children
        .iter()
        .map(|(name, child)| (name.clone(), shape(child)))
        .collect();
    (children, sorted_names(&node.components))
}

fn sorted_names(names: &[String]) -> Option<Vec<String>> {
    if names.is_empty() {
        return None;
    }
    let mut sorted = names.to_vec();
    sorted.sort_unstable();
    Some(sorted)
}

/// Count components per top-level directory.
///
/// Files sitting directly in the scan root have no directory, so they are
/// counted under the `_components` pseudo-category. That is the same key that
/// holds their names at the top of the tree, and it keeps the category sum
/// equal to the total.
fn count_categories(paths: &[ComponentPath]) -> BTreeMap<String, usize> {
    let mut categories = BTreeMap::new();
    for path in paths {
        let category = path.category().unwrap_or(COMPONENTS_KEY);
        *categories.entry(category.to_string()).or_insert(0) += 1;
    }
    categories
}
