//! Stock availability

use crate::{
    cart::Cart,
    products::{Product, ProductKey},
};

/// Units of `product` still available to add, given what `cart` already holds.
///
/// Products absent from the cart report their full stock.
pub fn remaining_stock(cart: &Cart<'_>, key: ProductKey, product: &Product<'_>) -> i64 {
    i64::from(product.stock) - i64::from(cart.quantity_of(key))
}

/// Whether the add action for `product` should be disabled.
pub fn is_sold_out(cart: &Cart<'_>, key: ProductKey, product: &Product<'_>) -> bool {
    remaining_stock(cart, key, product) <= 0
}
