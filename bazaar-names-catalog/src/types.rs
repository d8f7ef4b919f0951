//! Data model types for the item catalog and the generated conversion table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A Bazaar product identifier (e.g., "ENCHANTED_DIAMOND").
pub type ListingId = String;

// ── Catalog ─────────────────────────────────────────────────────────────────

/// An item from the SkyBlock items resource.
///
/// The resource carries many more fields (material, tier, stats, ...); only
/// the ones name derivation needs are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    /// Official display name, possibly with `§` color codes and `%%` placeholders.
    #[serde(default)]
    pub name: Option<String>,
}

impl CatalogEntry {
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

// ── Conversion table ────────────────────────────────────────────────────────

/// Listing id → display name, ordered by ordinal comparison of the ids.
///
/// Serializes as a plain JSON object whose keys come out in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionTable(BTreeMap<ListingId, String>);

impl ConversionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a conversion, returning the previous name for `id` if any.
    pub fn insert(&mut self, id: impl Into<ListingId>, name: impl Into<String>) -> Option<String> {
        self.0.insert(id.into(), name.into())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate conversions in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(ListingId, String)> for ConversionTable {
    fn from_iter<I: IntoIterator<Item = (ListingId, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ConversionTable {
    type Item = (ListingId, String);
    type IntoIter = std::collections::btree_map::IntoIter<ListingId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
