//! Seed catalog for the category/subcategory taxonomy.
//!
//! ## Summary
//! The catalog is a versioned JSON document listing every category name and
//! the subcategory names that belong to it. A default catalog is embedded at
//! compile time; deployments can point `seed.catalog_path` at their own file.
//!
//! ## Format
//! ```json
//! { "version": 1, "categories": [ { "name": "Design", "subcategories": ["Branding"] } ] }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Catalog format versions this build understands.
pub const SUPPORTED_CATALOG_VERSION: u32 = 1;

const DEFAULT_CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    version: u32,
    categories: Vec<CatalogEntry>,
}

/// Validated seed catalog.
///
/// Category order follows the source document. Lookups by category name are
/// exact and case-sensitive, matching how category rows are stored.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: u32,
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// ## Summary
    /// Returns the catalog embedded in the binary.
    ///
    /// ## Errors
    /// Returns an error if the embedded document fails validation.
    pub fn embedded() -> CoreResult<Self> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    /// ## Summary
    /// Reads and validates a catalog from a JSON file.
    ///
    /// ## Errors
    /// Returns `ConfigError` if the file cannot be read, or a validation
    /// error if its contents are not a valid catalog.
    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!("Failed to read catalog {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// ## Summary
    /// Parses and validates a catalog document.
    ///
    /// ## Errors
    /// Returns `InvalidInput` for malformed JSON and `ValidationError` when
    /// the version is unsupported, a name is blank, or a name repeats.
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        let document: CatalogDocument = serde_json::from_str(raw)
            .map_err(|e| CoreError::InvalidInput(format!("Malformed catalog: {e}")))?;

        if document.version != SUPPORTED_CATALOG_VERSION {
            return Err(CoreError::ValidationError(format!(
                "Unsupported catalog version {} (expected {SUPPORTED_CATALOG_VERSION})",
                document.version
            )));
        }

        Self::from_entries(document.version, document.categories)
    }

    fn from_entries(version: u32, entries: Vec<CatalogEntry>) -> CoreResult<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "Category at position {index} has a blank name"
                )));
            }
            if by_name.insert(entry.name.clone(), index).is_some() {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate category name: {}",
                    entry.name
                )));
            }

            let mut seen = HashSet::with_capacity(entry.subcategories.len());
            for sub in &entry.subcategories {
                if sub.trim().is_empty() {
                    return Err(CoreError::ValidationError(format!(
                        "Category {} has a blank subcategory name",
                        entry.name
                    )));
                }
                if !seen.insert(sub.as_str()) {
                    return Err(CoreError::ValidationError(format!(
                        "Duplicate subcategory {sub} in category {}",
                        entry.name
                    )));
                }
            }
        }

        Ok(Self {
            version,
            entries,
            by_name,
        })
    }

    /// ## Summary
    /// Loads the catalog at `path` if given, otherwise the embedded catalog.
    ///
    /// ## Errors
    /// Returns an error if the selected catalog cannot be read or validated.
    pub fn load(path: Option<&str>) -> CoreResult<Self> {
        match path {
            Some(path) => {
                tracing::info!(path = %path, "Loading seed catalog from file");
                Self::from_path(path)
            }
            None => {
                tracing::debug!("Using embedded seed catalog");
                Self::embedded()
            }
        }
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Category names in document order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of subcategory names across all categories.
    #[must_use]
    pub fn subcategory_count(&self) -> usize {
        self.entries.iter().map(|e| e.subcategories.len()).sum()
    }

    /// Subcategory names for a category. Unknown names yield an empty slice.
    #[must_use]
    pub fn subcategories_for(&self, category_name: &str) -> &[String] {
        self.by_name
            .get(category_name)
            .and_then(|&index| self.entries.get(index))
            .map(|entry| entry.subcategories.as_slice())
            .unwrap_or_default()
    }
}
