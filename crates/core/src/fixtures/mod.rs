//! Fixtures
//!
//! YAML configuration for the catalog, memberships and coupons. Fixture sets live under
//! `<base>/products/<name>.yml`, `<base>/memberships/<name>.yml` and
//! `<base>/coupons/<name>.yml`; the `*_str` loaders accept the YAML directly so callers
//! can embed it at compile time.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogError},
    coupons::Coupon,
    fixtures::{coupons::CouponsFixture, memberships::MembershipsFixture, products::ProductsFixture},
    memberships::Membership,
    products::Product,
};

pub mod coupons;
pub mod memberships;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Unsupported coupon type
    #[error("Unsupported coupon type: {0}")]
    UnsupportedCouponType(String),

    /// Coupon priced in a different currency than the catalog
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products found in fixture")]
    NoProducts,

    /// Catalog construction error
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog built from the products fixture
    catalog: Option<Catalog<'a>>,

    /// Memberships, in display order
    memberships: Vec<Membership>,

    /// Coupons, in display order
    coupons: Vec<Coupon<'a>>,
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            memberships: Vec::new(),
            coupons: Vec::new(),
        }
    }

    /// Load the products, memberships and coupons fixtures named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three files cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_products(name)?
            .load_memberships(name)?
            .load_coupons(name)?;

        Ok(fixture)
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("products", name)?;

        self.load_products_str(&contents)
    }

    /// Load products from YAML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, a price is invalid, products use
    /// different currencies or share an id, or no products are present.
    pub fn load_products_str(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

        let (_, currency) = fixture
            .products
            .first()
            .map(|product| products::parse_price(&product.price))
            .ok_or(FixtureError::NoProducts)??;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog::with_products(products, currency)?;

        debug!(products = catalog.len(), currency = currency.iso_alpha_code, "loaded products");

        self.catalog = Some(catalog);

        Ok(self)
    }

    /// Load memberships from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_memberships(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("memberships", name)?;

        self.load_memberships_str(&contents)
    }

    /// Load memberships from YAML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or a discount is invalid.
    pub fn load_memberships_str(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: MembershipsFixture = serde_norway::from_str(yaml)?;

        self.memberships = fixture
            .memberships
            .into_iter()
            .map(Membership::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(memberships = self.memberships.len(), "loaded memberships");

        Ok(self)
    }

    /// Load coupons from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_coupons(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("coupons", name)?;

        self.load_coupons_str(&contents)
    }

    /// Load coupons from YAML content.
    ///
    /// Amount coupons must be priced in the catalog currency when products are already loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, a coupon is invalid, or an amount
    /// coupon uses a different currency than the catalog.
    pub fn load_coupons_str(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CouponsFixture = serde_norway::from_str(yaml)?;

        let coupons = fixture
            .coupons
            .into_iter()
            .map(Coupon::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(catalog) = &self.catalog {
            check_coupon_currencies(&coupons, catalog.currency())?;
        }

        debug!(coupons = coupons.len(), "loaded coupons");

        self.coupons = coupons;

        Ok(self)
    }

    /// The catalog built from the products fixture.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoProducts`] if no products have been loaded.
    pub fn catalog(&self) -> Result<&Catalog<'a>, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoProducts)
    }

    /// Take ownership of the loaded catalog, memberships and coupons.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoProducts`] if no products have been loaded.
    pub fn into_parts(self) -> Result<(Catalog<'a>, Vec<Membership>, Vec<Coupon<'a>>), FixtureError> {
        let catalog = self.catalog.ok_or(FixtureError::NoProducts)?;

        Ok((catalog, self.memberships, self.coupons))
    }

    /// Memberships, in display order.
    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    /// Coupons, in display order.
    pub fn coupons(&self) -> &[Coupon<'a>] {
        &self.coupons
    }

    fn read(&self, kind: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(kind).join(format!("{name}.yml"));

        Ok(fs::read_to_string(file_path)?)
    }
}

fn check_coupon_currencies(
    coupons: &[Coupon<'_>],
    currency: &'static Currency,
) -> Result<(), FixtureError> {
    for coupon in coupons {
        if let crate::coupons::CouponDiscount::Amount(amount) = coupon.discount
            && amount.currency() != currency
        {
            return Err(FixtureError::CurrencyMismatch(
                currency.iso_alpha_code.to_string(),
                amount.currency().iso_alpha_code.to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::KRW};
    use testresult::TestResult;

    use super::*;

    const PRODUCTS: &str = r#"
products:
  - id: p1
    name: "상품1"
    price: "10000 KRW"
    stock: 20
    discounts:
      - quantity: 10
        rate: "10%"
  - id: p2
    name: "상품2"
    price: "20000 KRW"
    stock: 20
"#;

    #[test]
    fn load_products_str_keeps_fixture_order() -> TestResult {
        let mut fixture = Fixture::new();
        fixture.load_products_str(PRODUCTS)?;

        let catalog = fixture.catalog()?;
        let ids: Vec<&str> = catalog.iter().map(|(_, product)| product.id.as_str()).collect();

        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(catalog.currency(), KRW);

        Ok(())
    }

    #[test]
    fn load_products_str_rejects_empty_list() {
        let mut fixture = Fixture::new();

        let result = fixture.load_products_str("products: []");

        assert!(matches!(result, Err(FixtureError::NoProducts)));
    }

    #[test]
    fn load_products_str_rejects_mixed_currencies() {
        let yaml = r#"
products:
  - id: p1
    name: "A"
    price: "10000 KRW"
    stock: 1
  - id: p2
    name: "B"
    price: "5.00 USD"
    stock: 1
"#;

        let mut fixture = Fixture::new();

        let result = fixture.load_products_str(yaml);

        assert!(matches!(
            result,
            Err(FixtureError::Catalog(CatalogError::CurrencyMismatch(..)))
        ));
    }

    #[test]
    fn load_products_str_rejects_invalid_yaml() {
        let mut fixture = Fixture::new();

        let result = fixture.load_products_str("invalid: yaml: structure: [[[");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn load_coupons_str_checks_catalog_currency() -> TestResult {
        let mut fixture = Fixture::new();
        fixture.load_products_str(PRODUCTS)?;

        let result = fixture.load_coupons_str(
            r#"
coupons:
  - code: USD1
    name: "$1 off"
    type: amount
    value: "1.00 USD"
"#,
        );

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(expected, found)) if expected == "KRW" && found == "USD"));

        Ok(())
    }

    #[test]
    fn modifiers_that_would_raise_or_negate_the_total_are_rejected() -> TestResult {
        let mut fixture = Fixture::new();
        fixture.load_products_str(PRODUCTS)?;

        let membership = fixture.load_memberships_str(
            r#"
memberships:
  - code: ODD
    name: "과할인"
    discount: "150%"
"#,
        );
        assert!(matches!(membership, Err(FixtureError::InvalidPercentage(_))));

        let percentage = fixture.load_coupons_str(
            r#"
coupons:
  - code: MINUS50
    name: "역할인"
    type: percentage
    value: "-50%"
"#,
        );
        assert!(matches!(percentage, Err(FixtureError::InvalidPercentage(_))));

        let amount = fixture.load_coupons_str(
            r#"
coupons:
  - code: MINUS5000
    name: "역할인"
    type: amount
    value: "-5000 KRW"
"#,
        );
        assert!(matches!(amount, Err(FixtureError::InvalidPrice(_))));

        assert!(fixture.memberships().is_empty());
        assert!(fixture.coupons().is_empty());

        Ok(())
    }

    #[test]
    fn into_parts_returns_loaded_data() -> TestResult {
        let mut fixture = Fixture::new();

        fixture
            .load_products_str(PRODUCTS)?
            .load_memberships_str(
                r#"
memberships:
  - code: GOLD
    name: "골드"
    discount: "10%"
"#,
            )?
            .load_coupons_str(
                r#"
coupons:
  - code: AMOUNT1000
    name: "1000원 할인"
    type: amount
    value: "1000 KRW"
"#,
            )?;

        let (catalog, memberships, coupons) = fixture.into_parts()?;

        assert_eq!(catalog.len(), 2);
        assert_eq!(memberships.len(), 1);
        assert_eq!(
            coupons.first().map(|coupon| coupon.discount),
            Some(crate::coupons::CouponDiscount::Amount(Money::from_minor(1000, KRW)))
        );

        Ok(())
    }

    #[test]
    fn into_parts_without_products_fails() {
        assert!(matches!(Fixture::new().into_parts(), Err(FixtureError::NoProducts)));
    }
}
