use std::sync::Arc;

use leptos::{callback::Callback, prelude::*};
use trolley::{
    cart::{Cart, CartError},
    catalog::Catalog,
    coupons::Coupon,
    display::{format_price, format_rate},
    memberships::Membership,
    products::ProductKey,
};

use crate::selectors::{ApplyCoupon, ApplyMembership};

mod line_item;
mod summary;

use line_item::CartLineItem;
use summary::{CartSummary, order_summary};

/// UI model for a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineRow {
    /// Catalog key.
    pub key: ProductKey,

    /// Product name.
    pub name: String,

    /// Unit price.
    pub unit_price: String,

    /// Units in the cart.
    pub quantity: u32,

    /// Line total after the tier discount.
    pub total: String,

    /// Tier discount annotation, when one applies.
    pub discount: Option<String>,

    /// Whether another unit fits in stock.
    pub can_increase: bool,
}

/// Build the rows for every cart line, in cart order.
///
/// # Errors
///
/// Returns a [`CartError`] if a product is missing or pricing fails.
pub fn cart_rows(catalog: &Catalog<'_>, cart: &Cart<'_>) -> Result<Vec<CartLineRow>, CartError> {
    cart.lines()
        .iter()
        .map(|line| {
            let product = catalog
                .get(line.product())
                .ok_or(CartError::UnknownProduct(line.product()))?;
            let pricing = cart.price_line(catalog, line)?;

            Ok(CartLineRow {
                key: line.product(),
                name: product.name.clone(),
                unit_price: format_price(&product.price),
                quantity: line.quantity(),
                total: format_price(&pricing.total),
                discount: (!pricing.rate.is_zero())
                    .then(|| format!("{} 할인 적용", format_rate(pricing.rate))),
                can_increase: line.quantity() < product.stock,
            })
        })
        .collect()
}

fn render_error(error: &CartError) -> AnyView {
    view! { <p class="cart-error">{format!("장바구니를 계산할 수 없습니다: {error}")}</p> }
        .into_any()
}

fn render_lines(catalog: &Arc<Catalog<'static>>, cart: RwSignal<Cart<'static>>) -> AnyView {
    match cart.with(|current| cart_rows(catalog, current)) {
        Ok(rows) if rows.is_empty() => {
            view! { <p class="cart-empty">"장바구니가 비어 있습니다."</p> }.into_any()
        }
        Ok(rows) => view! {
            <ul class="cart-lines">
                {rows
                    .into_iter()
                    .map(|row| {
                        view! { <CartLineItem row=row catalog=Arc::clone(catalog) cart=cart /> }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        Err(error) => render_error(&error),
    }
}

fn render_summary(catalog: &Catalog<'static>, cart: RwSignal<Cart<'static>>) -> AnyView {
    match cart.with(|current| order_summary(catalog, current)) {
        Ok(summary) => view! { <CartSummary summary=summary /> }.into_any(),
        Err(error) => render_error(&error),
    }
}

/// Right pane: cart lines, membership and coupon selectors, and the order summary.
#[component]
pub fn CartPanel(
    catalog: Arc<Catalog<'static>>,
    cart: RwSignal<Cart<'static>>,
    memberships: Arc<Vec<Membership>>,
    coupons: Arc<Vec<Coupon<'static>>>,
    on_membership_change: Callback<Option<Membership>>,
    on_coupon_change: Callback<Option<Coupon<'static>>>,
) -> impl IntoView {
    let lines_catalog = Arc::clone(&catalog);
    let selected_membership =
        Signal::derive(move || cart.with(|current| current.selected_membership().cloned()));
    let selected_coupon =
        Signal::derive(move || cart.with(|current| current.selected_coupon().cloned()));

    view! {
        <aside class="cart-panel">
            <h2 class="panel-title">"장바구니"</h2>
            {move || render_lines(&lines_catalog, cart)}
            <ApplyMembership
                memberships=memberships
                selected=selected_membership
                on_change=Signal::derive(move || on_membership_change)
            />
            <ApplyCoupon
                coupons=coupons
                selected=selected_coupon
                on_change=Signal::derive(move || on_coupon_change)
            />
            {move || render_summary(&catalog, cart)}
        </aside>
    }
}
