use leptos::prelude::*;

use trolley::{
    cart::{Cart, CartError},
    catalog::Catalog,
    coupons::Coupon,
    display::format_price,
};

/// Display strings for the order summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of undiscounted line totals.
    pub total_before_discount: String,

    /// Everything taken off the order.
    pub total_discount: String,

    /// Amount to pay.
    pub total_after_discount: String,

    /// Selected membership, e.g. `골드 (10%)`.
    pub membership: Option<String>,

    /// Selected coupon value, e.g. `1000원`.
    pub coupon: Option<String>,
}

/// Price `cart` against `catalog` and format the result.
///
/// # Errors
///
/// Returns a [`CartError`] if pricing fails.
pub fn order_summary(catalog: &Catalog<'_>, cart: &Cart<'_>) -> Result<OrderSummary, CartError> {
    let totals = cart.calculate_total(catalog)?;

    Ok(OrderSummary {
        total_before_discount: format_price(&totals.total_before_discount),
        total_discount: format_price(&totals.total_discount),
        total_after_discount: format_price(&totals.total_after_discount),
        membership: cart
            .selected_membership()
            .map(|membership| format!("{} ({})", membership.name, membership.discount_label())),
        coupon: cart.selected_coupon().map(Coupon::value_label),
    })
}

fn render_optional_row(label: &'static str, value: Option<String>) -> AnyView {
    value.map_or_else(
        || ().into_any(),
        |value| {
            view! {
                <p class="cart-summary-row cart-summary-row-muted">
                    <span>{label}</span>
                    <span>{value}</span>
                </p>
            }
            .into_any()
        },
    )
}

#[component]
pub(super) fn CartSummary(summary: OrderSummary) -> impl IntoView {
    view! {
        <div class="cart-summary">
            <p class="cart-summary-row">
                <span>"총 상품 금액"</span>
                <span>{summary.total_before_discount}</span>
            </p>
            {render_optional_row("회원 등급", summary.membership)}
            {render_optional_row("쿠폰 할인", summary.coupon)}
            <p class="cart-summary-row">
                <span>"할인 금액"</span>
                <span>{summary.total_discount}</span>
            </p>
            <p class="cart-summary-row cart-summary-total">
                <span>"최종 결제 금액"</span>
                <span>{summary.total_after_discount}</span>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::KRW};
    use testresult::TestResult;
    use trolley::{coupons::CouponDiscount, products::Product};

    use super::*;

    #[test]
    fn empty_cart_summary_is_zero() -> TestResult {
        let catalog = Catalog::with_products(
            [Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 5)],
            KRW,
        )?;

        let summary = order_summary(&catalog, &Cart::new())?;

        assert_eq!(summary.total_before_discount, "0원");
        assert_eq!(summary.total_discount, "0원");
        assert_eq!(summary.total_after_discount, "0원");
        assert_eq!(summary.membership, None);
        assert_eq!(summary.coupon, None);

        Ok(())
    }

    #[test]
    fn amount_coupon_shows_value_label() -> TestResult {
        let catalog = Catalog::with_products(
            [Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 5)],
            KRW,
        )?;
        let key = catalog.key_for("p1").ok_or("missing product")?;
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, key)?;
        cart.apply_coupon(Some(Coupon::new(
            "AMOUNT1000",
            "1000원 할인",
            CouponDiscount::Amount(Money::from_minor(1_000, KRW)),
        )));

        let summary = order_summary(&catalog, &cart)?;

        assert_eq!(summary.coupon.as_deref(), Some("1000원"));
        assert_eq!(summary.total_discount, "1000원");
        assert_eq!(summary.total_after_discount, "9000원");

        Ok(())
    }
}
