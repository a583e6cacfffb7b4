//! Filament reference catalog.
//!
//! Maps a spool's variant id (e.g. `A00-R3`) to the retail product code and
//! colour name. The catalog is an immutable value built once and passed by
//! reference; lookups are exact, case-sensitive matches. Duplicate variant
//! ids are rejected when the catalog is built, so a lookup never depends on
//! entry order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod table;

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Variant code as stored on the tag.
    pub variant_id: String,
    /// Five-digit retail product code.
    pub product_code: String,
    /// Marketing colour name.
    pub color_name: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate variant id in catalog: {variant_id}")]
    DuplicateVariant { variant_id: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable variant-id keyed catalog.
///
/// # Examples
/// ```
/// use spooltag_core::FilamentCatalog;
///
/// let catalog = FilamentCatalog::builtin()?;
/// let entry = catalog.lookup("A00-R3").expect("known variant");
/// assert_eq!(entry.product_code, "10204");
/// assert_eq!(entry.color_name, "Hot Pink");
/// assert!(catalog.lookup("a00-r3").is_none());
/// # Ok::<(), spooltag_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilamentCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl FilamentCatalog {
    /// Build a catalog, rejecting duplicate variant ids.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut map = BTreeMap::new();
        for entry in entries {
            match map.entry(entry.variant_id.clone()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateVariant {
                        variant_id: entry.variant_id,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// The Bambu Lab variant table shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_entries(table::BAMBU_FILAMENTS.iter().map(
            |&(variant_id, product_code, color_name)| CatalogEntry {
                variant_id: variant_id.to_string(),
                product_code: product_code.to_string(),
                color_name: color_name.to_string(),
            },
        ))
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn lookup(&self, variant_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(variant_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by variant id.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}
