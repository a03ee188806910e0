//! Coupons

use decimal_percentage::Percentage;
use rusty_money::{Money, iso::Currency};

use crate::{
    display::{format_percentage, format_price},
    selection::Selectable,
};

/// How a coupon reduces the order total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CouponDiscount<'a> {
    /// Subtract a fixed amount (e.g. "1000원 off"). The total never drops below zero.
    Amount(Money<'a, Currency>),

    /// Reduce the total by a percentage (e.g. "10% off").
    Percentage(Percentage),
}

/// A one-time discount modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon<'a> {
    /// Stable coupon code
    pub code: String,

    /// Display name
    pub name: String,

    /// Discount applied to the order total
    pub discount: CouponDiscount<'a>,
}

impl<'a> Coupon<'a> {
    /// Create a new coupon.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        discount: CouponDiscount<'a>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            discount,
        }
    }

    /// Label for the coupon value: `1000원` for amount coupons, `10%` for percentage coupons.
    pub fn value_label(&self) -> String {
        match &self.discount {
            CouponDiscount::Amount(amount) => format_price(amount),
            CouponDiscount::Percentage(percent) => format_percentage(percent),
        }
    }
}

impl Selectable for Coupon<'_> {
    fn code(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::KRW;

    use super::*;

    #[test]
    fn amount_coupon_label_is_won_amount() {
        let coupon = Coupon::new(
            "AMOUNT1000",
            "1000원 할인",
            CouponDiscount::Amount(Money::from_minor(1000, KRW)),
        );

        assert_eq!(coupon.value_label(), "1000원");
    }

    #[test]
    fn percentage_coupon_label_is_percent() {
        let coupon = Coupon::new(
            "PERCENT10",
            "10% 할인",
            CouponDiscount::Percentage(Percentage::from(0.1)),
        );

        assert_eq!(coupon.value_label(), "10%");
    }
}
