//! Product search

use crate::{catalog::Catalog, products::ProductKey};

/// Products whose name contains `keyword`, in catalog order.
///
/// Matching is a case-insensitive substring test against the trimmed keyword; a blank
/// keyword matches every product.
pub fn search_products(catalog: &Catalog<'_>, keyword: &str) -> Vec<ProductKey> {
    let needle = keyword.trim().to_lowercase();

    catalog
        .iter()
        .filter(|(_, product)| needle.is_empty() || product.name.to_lowercase().contains(&needle))
        .map(|(key, _)| key)
        .collect()
}
