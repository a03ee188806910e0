//! Product Fixtures

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, KRW, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{DiscountTier, Product},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products, in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Stable product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Product price (e.g., "10000 KRW")
    pub price: String,

    /// Units in stock
    pub stock: u32,

    /// Volume discount tiers
    #[serde(default)]
    pub discounts: Vec<DiscountTierFixture>,
}

/// Discount tier fixture
#[derive(Debug, Deserialize)]
pub struct DiscountTierFixture {
    /// Minimum quantity for the tier
    pub quantity: u32,

    /// Discount rate (e.g., "10%" or "0.1")
    pub rate: String,
}

impl TryFrom<DiscountTierFixture> for DiscountTier {
    type Error = FixtureError;

    fn try_from(fixture: DiscountTierFixture) -> Result<Self, Self::Error> {
        Ok(DiscountTier::new(fixture.quantity, parse_rate(&fixture.rate)?))
    }
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let price = Money::from_minor(minor_units, currency);

        let discounts = fixture
            .discounts
            .into_iter()
            .map(DiscountTier::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Product::new(fixture.id, fixture.name, price, fixture.stock).with_discounts(discounts))
    }
}

/// Parse price string (e.g., "2.99 GBP" or "10000 KRW") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "KRW" => KRW,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let minor_units = amount
        .checked_mul(Decimal::from(10_u64.pow(currency.exponent)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

/// Parse percentage string (e.g., "15%" or "0.15") into a `Percentage`
///
/// Accepts two formats:
/// - Percentage format: "15%" for 15%
/// - Decimal format: "0.15" for 15%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed or falls outside 0–100%.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    let fraction = if let Some(percent_str) = trimmed.strip_suffix('%') {
        percent_str.trim().parse::<f64>().map(|points| points / 100.0)
    } else {
        trimmed.parse::<f64>()
    }
    .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

    if !(0.0..=1.0).contains(&fraction) {
        return Err(FixtureError::InvalidPercentage(s.to_string()));
    }

    Ok(Percentage::from(fraction))
}

/// Parse a discount rate (e.g., "10%" or "0.1") into a fraction between 0 and 1
///
/// # Errors
///
/// Returns an error if the string cannot be parsed or falls outside 0–100%.
pub fn parse_rate(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();

    let rate = if let Some(percent_str) = trimmed.strip_suffix('%') {
        percent_str
            .trim()
            .parse::<Decimal>()
            .map(|points| points / Decimal::ONE_HUNDRED)
    } else {
        trimmed.parse::<Decimal>()
    }
    .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(FixtureError::InvalidPercentage(s.to_string()));
    }

    Ok(rate)
}
