//! Products

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use smallvec::SmallVec;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// A volume discount: buying at least `quantity` units discounts each unit by `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTier {
    /// Minimum quantity on the cart line for the tier to apply
    pub quantity: u32,

    /// Discount rate as a fraction between 0 and 1
    pub rate: Decimal,
}

impl DiscountTier {
    /// Create a new discount tier.
    pub const fn new(quantity: u32, rate: Decimal) -> Self {
        Self { quantity, rate }
    }

    /// Whether a cart line of `quantity` units qualifies for this tier.
    pub const fn is_met_by(&self, quantity: u32) -> bool {
        quantity >= self.quantity
    }
}

/// Discount tiers for a product, stored inline for the common case of a handful of tiers.
pub type DiscountTiers = SmallVec<[DiscountTier; 4]>;

/// Product
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// Stable product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Money<'a, Currency>,

    /// Units in stock
    pub stock: u32,

    /// Volume discount tiers, in display order
    pub discounts: DiscountTiers,
}

impl<'a> Product<'a> {
    /// Create a product with no discount tiers.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            discounts: SmallVec::new(),
        }
    }

    /// Replace the product's discount tiers.
    #[must_use]
    pub fn with_discounts(mut self, discounts: impl IntoIterator<Item = DiscountTier>) -> Self {
        self.discounts = discounts.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::KRW;

    use super::*;

    #[test]
    fn tier_is_met_at_and_above_threshold() {
        let tier = DiscountTier::new(10, Decimal::new(1, 1));

        assert!(!tier.is_met_by(9));
        assert!(tier.is_met_by(10));
        assert!(tier.is_met_by(11));
    }

    #[test]
    fn with_discounts_keeps_tier_order() {
        let product = Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 20).with_discounts([
            DiscountTier::new(10, Decimal::new(1, 1)),
            DiscountTier::new(5, Decimal::new(5, 2)),
        ]);

        let thresholds: Vec<u32> = product.discounts.iter().map(|tier| tier.quantity).collect();

        assert_eq!(thresholds, vec![10, 5]);
    }
}
