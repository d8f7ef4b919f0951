//! Cross-reference Bazaar listings against the item catalog.

use std::collections::HashMap;

use bazaar_names_catalog::{CatalogEntry, ConversionTable, ListingId, format_name};

/// Outcome of resolving every listed product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// One display name per listed product.
    pub table: ConversionTable,
    /// Listed products with no catalog entry, in ascending order. Their names
    /// came from the fallback prettifier.
    pub unmatched: Vec<ListingId>,
}

/// Resolve a display name for every id in `listing_ids`.
///
/// Ids with a catalog entry are formatted from the entry's name; the rest go
/// through the fallback path and are recorded in `unmatched`. If the catalog
/// repeats an id, the later entry wins.
pub fn resolve_conversions<I, S>(listing_ids: I, catalog: &[CatalogEntry]) -> Resolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let by_id: HashMap<&str, &CatalogEntry> = catalog
        .iter()
        .map(|entry| (entry.id.as_str(), entry))
        .collect();

    let mut resolution = Resolution::default();
    for id in listing_ids {
        let id = id.as_ref();
        let name = match by_id.get(id) {
            Some(entry) => format_name(entry.name.as_deref(), id),
            None => {
                resolution.unmatched.push(id.to_string());
                format_name(None, id)
            }
        };
        resolution.table.insert(id, name);
    }

    resolution.unmatched.sort();
    resolution.unmatched.dedup();
    resolution
}
