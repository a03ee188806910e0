use std::sync::Arc;

use leptos::prelude::*;
use tracing::warn;

use trolley::{cart::Cart, catalog::Catalog, products::ProductKey};

use super::CartLineRow;

pub(super) fn change_quantity(
    cart: &mut Cart<'static>,
    catalog: &Catalog<'static>,
    key: ProductKey,
    quantity: u32,
) {
    if let Err(error) = cart.update_quantity(catalog, key, quantity) {
        // Dropped without a subscriber, same as the add path in `products.rs`.
        warn!(%error, quantity, "failed to update cart quantity");
    }
}

#[component]
pub(super) fn CartLineItem(
    row: CartLineRow,
    catalog: Arc<Catalog<'static>>,
    cart: RwSignal<Cart<'static>>,
) -> impl IntoView {
    let key = row.key;
    let quantity = row.quantity;
    let can_increase = row.can_increase;
    let decrease_catalog = Arc::clone(&catalog);

    view! {
        <li class="cart-line">
            <div class="cart-line-header">
                <span class="cart-line-name">{row.name}</span>
                <span class="cart-line-unit-price">{row.unit_price}</span>
            </div>
            <div class="cart-line-body">
                <div class="cart-line-quantity">
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="수량 감소"
                        on:click=move |_| {
                            cart.update(|cart| {
                                change_quantity(cart, &decrease_catalog, key, quantity.saturating_sub(1));
                            });
                        }
                    >
                        "-"
                    </button>
                    <span class="cart-line-count">{quantity}</span>
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="수량 증가"
                        disabled=!can_increase
                        on:click=move |_| {
                            cart.update(|cart| {
                                change_quantity(cart, &catalog, key, quantity.saturating_add(1));
                            });
                        }
                    >
                        "+"
                    </button>
                </div>
                <span class="cart-line-total">{row.total}</span>
                {row.discount.map(|label| view! { <span class="cart-line-discount">{label}</span> })}
                <button
                    type="button"
                    class="remove-button"
                    on:click=move |_| cart.update(|cart| cart.remove_from_cart(key))
                >
                    "삭제"
                </button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::KRW};
    use testresult::TestResult;
    use trolley::products::Product;

    use super::*;

    #[test]
    fn change_quantity_to_zero_removes_line() -> TestResult {
        let catalog = Catalog::with_products(
            [Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 5)],
            KRW,
        )?;
        let key = catalog.key_for("p1").ok_or("missing product")?;
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, key)?;

        change_quantity(&mut cart, &catalog, key, 0);

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn change_quantity_caps_at_stock() -> TestResult {
        let catalog = Catalog::with_products(
            [Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 2)],
            KRW,
        )?;
        let key = catalog.key_for("p1").ok_or("missing product")?;
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, key)?;

        change_quantity(&mut cart, &catalog, key, 9);

        assert_eq!(cart.quantity_of(key), 2);

        Ok(())
    }

    #[test]
    fn change_quantity_for_unknown_product_leaves_cart_unchanged() -> TestResult {
        let catalog = Catalog::with_products(
            [Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 5)],
            KRW,
        )?;
        let wider = Catalog::with_products(
            [
                Product::new("p1", "상품1", Money::from_minor(10_000, KRW), 5),
                Product::new("p2", "상품2", Money::from_minor(20_000, KRW), 5),
            ],
            KRW,
        )?;
        let key = catalog.key_for("p1").ok_or("missing product")?;
        let stray = wider.key_for("p2").ok_or("missing product")?;
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, key)?;

        change_quantity(&mut cart, &catalog, stray, 3);

        assert_eq!(cart.quantity_of(key), 1);
        assert_eq!(cart.quantity_of(stray), 0);

        Ok(())
    }
}
