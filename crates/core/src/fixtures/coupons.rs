//! Coupon Fixtures

use rusty_money::Money;
use serde::Deserialize;

use crate::{
    coupons::{Coupon, CouponDiscount},
    fixtures::{
        FixtureError,
        products::{parse_percentage, parse_price},
    },
};

/// Wrapper for coupons in YAML
#[derive(Debug, Deserialize)]
pub struct CouponsFixture {
    /// Coupons, in display order
    pub coupons: Vec<CouponFixture>,
}

/// Coupon Fixture
#[derive(Debug, Deserialize)]
pub struct CouponFixture {
    /// Stable coupon code
    pub code: String,

    /// Display name
    pub name: String,

    /// Discount type: `amount` or `percentage`
    #[serde(rename = "type")]
    pub discount_type: String,

    /// Discount value (e.g., "5000 KRW" for amount coupons, "10%" for percentage coupons)
    pub value: String,
}

impl TryFrom<CouponFixture> for Coupon<'_> {
    type Error = FixtureError;

    fn try_from(fixture: CouponFixture) -> Result<Self, Self::Error> {
        let discount = match fixture.discount_type.as_str() {
            "amount" => {
                let (minor_units, currency) = parse_price(&fixture.value)?;

                if minor_units < 0 {
                    return Err(FixtureError::InvalidPrice(fixture.value));
                }

                CouponDiscount::Amount(Money::from_minor(minor_units, currency))
            }
            "percentage" => CouponDiscount::Percentage(parse_percentage(&fixture.value)?),
            other => return Err(FixtureError::UnsupportedCouponType(other.to_string())),
        };

        Ok(Coupon::new(fixture.code, fixture.name, discount))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::KRW;

    use super::*;

    fn fixture(discount_type: &str, value: &str) -> CouponFixture {
        CouponFixture {
            code: "C1".to_string(),
            name: "쿠폰".to_string(),
            discount_type: discount_type.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn amount_coupon_parses_price() -> Result<(), FixtureError> {
        let coupon = Coupon::try_from(fixture("amount", "1000 KRW"))?;

        assert_eq!(
            coupon.discount,
            CouponDiscount::Amount(Money::from_minor(1000, KRW))
        );
        assert_eq!(coupon.value_label(), "1000원");

        Ok(())
    }

    #[test]
    fn percentage_coupon_parses_percent() -> Result<(), FixtureError> {
        let coupon = Coupon::try_from(fixture("percentage", "10%"))?;

        assert_eq!(coupon.value_label(), "10%");

        Ok(())
    }

    #[test]
    fn unknown_coupon_type_is_rejected() {
        let result = Coupon::try_from(fixture("bogo", "1"));

        assert!(matches!(result, Err(FixtureError::UnsupportedCouponType(kind)) if kind == "bogo"));
    }

    #[test]
    fn negative_amount_coupon_is_rejected() {
        let result = Coupon::try_from(fixture("amount", "-5000 KRW"));

        assert!(matches!(result, Err(FixtureError::InvalidPrice(value)) if value == "-5000 KRW"));
    }

    #[test]
    fn negative_percentage_coupon_is_rejected() {
        let result = Coupon::try_from(fixture("percentage", "-50%"));

        assert!(matches!(result, Err(FixtureError::InvalidPercentage(_))));
    }
}
