//! Discounts
//!
//! Volume-tier evaluation plus the rounding helpers shared by every discount that
//! reduces an amount by a fraction of itself.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::MoneyError;
use thiserror::Error;

use crate::products::DiscountTier;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The largest rate a product advertises across all of its tiers, or zero when it has none.
pub fn max_advertised_discount(tiers: &[DiscountTier]) -> Decimal {
    tiers
        .iter()
        .map(|tier| tier.rate)
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// The rate applicable to a cart line of `quantity` units.
///
/// Every tier whose threshold is met competes and the highest rate wins, so the order of
/// `tiers` never changes the result. Returns zero when no tier qualifies.
pub fn applied_discount(tiers: &[DiscountTier], quantity: u32) -> Decimal {
    tiers
        .iter()
        .filter(|tier| tier.is_met_by(quantity))
        .map(|tier| tier.rate)
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// # Errors
///
/// Returns an error if:
/// - The percentage calculation overflows or cannot be safely represented (`DiscountError::PercentConversion`).
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    // decimal_percentage doesn't expose the underlying Decimal
    rate_of_minor((*percent) * Decimal::ONE, minor)
}

/// Calculate `rate * minor`, rounded half away from zero to whole minor units.
///
/// # Errors
///
/// Returns `DiscountError::PercentConversion` if the product overflows the decimal range
/// or cannot be represented as an `i64`.
pub fn rate_of_minor(rate: Decimal, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    rate.checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}
