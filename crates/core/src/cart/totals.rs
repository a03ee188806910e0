//! Cart totals

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tracing::trace;

use crate::{
    cart::{Cart, CartError, CartLine, lookup},
    catalog::Catalog,
    coupons::CouponDiscount,
    discounts::{applied_discount, percent_of_minor, rate_of_minor},
    products::Product,
};

/// The three figures shown in the order summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals<'a> {
    /// Sum of unit price × quantity over every line
    pub total_before_discount: Money<'a, Currency>,

    /// Amount payable after tier, membership and coupon discounts
    pub total_after_discount: Money<'a, Currency>,

    /// `total_before_discount - total_after_discount`
    pub total_discount: Money<'a, Currency>,
}

/// Pricing of a single cart line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePricing<'a> {
    /// Tier rate applied to the line
    pub rate: Decimal,

    /// Unit price × quantity
    pub subtotal: Money<'a, Currency>,

    /// Subtotal after the tier discount
    pub total: Money<'a, Currency>,
}

/// Price a cart line: its subtotal, applicable tier rate and discounted total.
///
/// # Errors
///
/// Returns [`CartError::Overflow`] if `price × quantity` does not fit in minor units, or
/// a discount error if the tier rate cannot be applied.
pub fn price_line<'a>(product: &Product<'a>, quantity: u32) -> Result<LinePricing<'a>, CartError> {
    let currency = product.price.currency();
    let subtotal_minor = product
        .price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or_else(|| CartError::Overflow(product.name.clone()))?;

    let rate = applied_discount(&product.discounts, quantity);
    let discount_minor = rate_of_minor(rate, subtotal_minor)?;

    Ok(LinePricing {
        rate,
        subtotal: Money::from_minor(subtotal_minor, currency),
        total: Money::from_minor(subtotal_minor - discount_minor, currency),
    })
}

impl<'a> Cart<'a> {
    /// Price a single line of this cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if the line's product is missing from the
    /// catalog, or any error from [`price_line`].
    pub fn price_line<'c>(
        &self,
        catalog: &Catalog<'c>,
        line: &CartLine,
    ) -> Result<LinePricing<'c>, CartError> {
        price_line(lookup(catalog, line.product())?, line.quantity())
    }

    /// Compute the order totals.
    ///
    /// Each line is first reduced by its tier rate. The membership percentage then
    /// applies to the running total, followed by the coupon: amount coupons subtract and percentage coupons reduce
    /// by their percentage. The total never drops below zero. Every
    /// reduction is rounded to whole minor units.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if a line's product is missing from the catalog or any
    /// money arithmetic overflows.
    pub fn calculate_total<'c>(&self, catalog: &Catalog<'c>) -> Result<CartTotals<'c>, CartError> {
        let currency = catalog.currency();

        let mut before_minor: i64 = 0;
        let mut after_minor: i64 = 0;

        for line in &self.lines {
            let pricing = self.price_line(catalog, line)?;

            before_minor = before_minor
                .checked_add(pricing.subtotal.to_minor_units())
                .ok_or_else(|| CartError::Overflow("cart subtotal".to_string()))?;

            after_minor = after_minor
                .checked_add(pricing.total.to_minor_units())
                .ok_or_else(|| CartError::Overflow("cart subtotal".to_string()))?;
        }

        if let Some(membership) = &self.membership {
            after_minor = (after_minor - percent_of_minor(&membership.discount, after_minor)?).max(0);
        }

        if let Some(coupon) = &self.coupon {
            after_minor = match &coupon.discount {
                CouponDiscount::Amount(amount) => Money::from_minor(after_minor, currency)
                    .sub(*amount)?
                    .to_minor_units()
                    .max(0),
                CouponDiscount::Percentage(percent) => {
                    (after_minor - percent_of_minor(percent, after_minor)?).max(0)
                }
            };
        }

        trace!(before_minor, after_minor, "calculated cart total");

        Ok(CartTotals {
            total_before_discount: Money::from_minor(before_minor, currency),
            total_after_discount: Money::from_minor(after_minor, currency),
            total_discount: Money::from_minor(before_minor - after_minor, currency),
        })
    }
}
