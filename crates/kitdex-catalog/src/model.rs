//! Catalog data model and its JSON shape.
//!
//! # Design
//! - `CatalogNode` is a tagged variant so the "collapse pure leaves" rule lives in the type.
//! - Serialisation is hand-written to pin key order: `_meta`, categories, `_components`, `_flat`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Reserved top-level key carrying run metadata.
pub const META_KEY: &str = "_meta";
/// Reserved top-level key carrying the sorted flat identifier list.
pub const FLAT_KEY: &str = "_flat";
/// Reserved per-node key carrying component names that sit beside nested categories.
pub const COMPONENTS_KEY: &str = "_components";
/// Every key the catalog reserves for itself.
pub const RESERVED_KEYS: [&str; 3] = [META_KEY, FLAT_KEY, COMPONENTS_KEY];

/// Relative location of one component file below the scan root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentPath {
    directories: Vec<String>,
    name: String,
}

impl ComponentPath {
    /// Build a component path from its directory segments and extension-less file name.
    #[must_use]
    pub const fn new(directories: Vec<String>, name: String) -> Self {
        Self { directories, name }
    }

    /// Parse a `/`-separated relative path, stripping `extension` from the last segment.
    ///
    /// Only the trailing `extension` is removed, so a file named exactly like the
    /// extension gets an empty name. Returns `None` when the path does not end
    /// with `extension`.
    #[must_use]
    pub fn parse(relative: &str, extension: &str) -> Option<Self> {
        let mut segments: Vec<String> = relative.split('/').map(str::to_string).collect();
        let file_name = segments.pop()?;
        let name = file_name.strip_suffix(extension)?;
        Some(Self::new(segments, name.to_string()))
    }

    /// Directory segments between the root and the file.
    #[must_use]
    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    /// Component name (final segment without extension).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level directory the component belongs to, if it is not at the root.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.directories.first().map(String::as_str)
    }

    /// Identifier used in the flat list: the relative path without extension.
    #[must_use]
    pub fn id(&self) -> String {
        let mut id = self.directories.join("/");
        if !id.is_empty() {
            id.push('/');
        }
        id.push_str(&self.name);
        id
    }
}

/// One node of the nested catalog tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    /// Directory holding only components: serialised as a sorted name array.
    Leaf(Vec<String>),
    /// Directory with nested categories and possibly its own components.
    Branch {
        /// Nested categories keyed by directory name.
        children: BTreeMap<String, CatalogNode>,
        /// Sorted names of components directly inside this directory.
        components: Option<Vec<String>>,
    },
}

impl Serialize for CatalogNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Leaf(names) => names.serialize(serializer),
            Self::Branch {
                children,
                components,
            } => serialize_branch(serializer, None, children, components.as_deref(), None),
        }
    }
}

/// Run metadata stored under `_meta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    /// ISO-8601 UTC generation time with millisecond precision.
    pub generated: String,
    /// Number of cataloged components.
    pub total_components: usize,
    /// Scan root as configured.
    pub source: String,
    /// Component counts keyed by top-level category.
    pub categories: BTreeMap<String, usize>,
}

/// Complete catalog produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Run metadata.
    pub meta: CatalogMeta,
    /// Top-level categories keyed by directory name.
    pub tree: BTreeMap<String, CatalogNode>,
    /// Sorted names of components sitting directly in the scan root.
    pub root_components: Option<Vec<String>>,
    /// Sorted identifiers of every component.
    pub flat: Vec<String>,
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_branch(
            serializer,
            Some(&self.meta),
            &self.tree,
            self.root_components.as_deref(),
            Some(&self.flat),
        )
    }
}

fn serialize_branch<S>(
    serializer: S,
    meta: Option<&CatalogMeta>,
    children: &BTreeMap<String, CatalogNode>,
    components: Option<&[String]>,
    flat: Option<&[String]>,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let len = children.len()
        + usize::from(meta.is_some())
        + usize::from(components.is_some())
        + usize::from(flat.is_some());
    let mut map = serializer.serialize_map(Some(len))?;
    if let Some(meta) = meta {
        map.serialize_entry(META_KEY, meta)?;
    }
    for (key, node) in children {
        map.serialize_entry(key, node)?;
    }
    if let Some(components) = components {
        map.serialize_entry(COMPONENTS_KEY, components)?;
    }
    if let Some(flat) = flat {
        map.serialize_entry(FLAT_KEY, flat)?;
    }
    map.end()
}
