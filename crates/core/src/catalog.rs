//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Product, ProductKey};

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Another product already uses this identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A product's currency differs from the catalog currency (product id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// Products available for purchase, kept in display order.
#[derive(Debug)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    keys: FxHashMap<String, ProductKey>,
    order: Vec<ProductKey>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: SlotMap::with_key(),
            keys: FxHashMap::default(),
            order: Vec::new(),
            currency,
        }
    }

    /// Create a catalog from products, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if two products share an id or a product is priced in
    /// another currency.
    pub fn with_products(
        products: impl IntoIterator<Item = Product<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        for product in products {
            catalog.insert(product)?;
        }

        Ok(catalog)
    }

    /// Append a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the id is already taken or the currency differs.
    pub fn insert(&mut self, product: Product<'a>) -> Result<ProductKey, CatalogError> {
        if self.keys.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let id = product.id.clone();
        let key = self.products.insert(product);

        self.keys.insert(id, key);
        self.order.push(key);

        Ok(key)
    }

    /// Look up a product by key.
    pub fn get(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Look up the key for a stable product id.
    pub fn key_for(&self, id: &str) -> Option<ProductKey> {
        self.keys.get(id).copied()
    }

    /// Iterate over products in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductKey, &Product<'a>)> {
        self.order
            .iter()
            .filter_map(|&key| self.products.get(key).map(|product| (key, product)))
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Currency every product is priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{KRW, USD},
    };
    use testresult::TestResult;

    use super::*;

    #[test]
    fn with_products_preserves_insertion_order() -> TestResult {
        let catalog = Catalog::with_products(
            [
                Product::new("p2", "상품2", Money::from_minor(20_000, KRW), 20),
                Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 20),
            ],
            KRW,
        )?;

        let ids: Vec<&str> = catalog.iter().map(|(_, product)| product.id.as_str()).collect();

        assert_eq!(ids, vec!["p2", "p1"]);
        assert_eq!(catalog.len(), 2);

        Ok(())
    }

    #[test]
    fn key_for_resolves_stable_id() -> TestResult {
        let mut catalog = Catalog::new(KRW);
        let key = catalog.insert(Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 20))?;

        assert_eq!(catalog.key_for("p1"), Some(key));
        assert_eq!(catalog.key_for("missing"), None);

        Ok(())
    }

    #[test]
    fn insert_rejects_duplicate_ids() -> TestResult {
        let mut catalog = Catalog::new(KRW);
        catalog.insert(Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 20))?;

        let result = catalog.insert(Product::new("p1", "다른 상품", Money::from_minor(1, KRW), 1));

        assert_eq!(result, Err(CatalogError::DuplicateProduct("p1".to_string())));

        Ok(())
    }

    #[test]
    fn insert_rejects_currency_mismatch() {
        let mut catalog = Catalog::new(KRW);

        let result = catalog.insert(Product::new("p1", "Widget", Money::from_minor(100, USD), 1));

        assert!(matches!(result, Err(CatalogError::CurrencyMismatch(id, "USD", "KRW")) if id == "p1"));
        assert!(catalog.is_empty());
    }
}
