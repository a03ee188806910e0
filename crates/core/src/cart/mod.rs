//! Cart
//!
//! The cart owns its line items and the selected membership and coupon. Every mutation
//! goes through the methods here; views only read snapshots.

use rusty_money::MoneyError;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::Catalog,
    coupons::Coupon,
    discounts::DiscountError,
    memberships::Membership,
    products::{Product, ProductKey},
    stock::remaining_stock,
};

pub mod totals;

/// Errors related to cart mutations or totals.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product is not in the catalog.
    #[error("Product not found in catalog")]
    UnknownProduct(ProductKey),

    /// Every unit of the product is already in the cart.
    #[error("{0} is sold out")]
    SoldOut(String),

    /// A line total did not fit in minor units.
    #[error("Line total overflowed for {0}")]
    Overflow(String),

    /// Discount calculation failed.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// One product in the cart plus the requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    product: ProductKey,
    quantity: u32,
}

impl CartLine {
    /// Create a new cart line.
    pub const fn new(product: ProductKey, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Returns the product of the line
    pub const fn product(&self) -> ProductKey {
        self.product
    }

    /// Returns the quantity of the line
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Cart
#[derive(Debug, Clone, Default)]
pub struct Cart<'a> {
    lines: Vec<CartLine>,
    membership: Option<Membership>,
    coupon: Option<Coupon<'a>>,
}

impl<'a> Cart<'a> {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart lines, in the order products were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line holding `product`, if any.
    pub fn line(&self, product: ProductKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product == product)
    }

    /// Units of `product` currently in the cart, zero when absent.
    pub fn quantity_of(&self, product: ProductKey) -> u32 {
        self.line(product).map_or(0, CartLine::quantity)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The applied membership, if any.
    pub fn selected_membership(&self) -> Option<&Membership> {
        self.membership.as_ref()
    }

    /// The applied coupon, if any.
    pub fn selected_coupon(&self) -> Option<&Coupon<'a>> {
        self.coupon.as_ref()
    }

    /// Add one unit of `product`, creating its line on first add.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownProduct`]: the product is not in the catalog.
    /// - [`CartError::SoldOut`]: every unit in stock is already in the cart.
    pub fn add_to_cart(&mut self, catalog: &Catalog<'_>, product: ProductKey) -> Result<(), CartError> {
        let meta = lookup(catalog, product)?;

        if remaining_stock(self, product, meta) <= 0 {
            return Err(CartError::SoldOut(meta.name.clone()));
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product == product) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(product, 1));
        }

        debug!(product = %meta.id, quantity = self.quantity_of(product), "added to cart");

        Ok(())
    }

    /// Remove the line holding `product`. Removing an absent product does nothing.
    pub fn remove_from_cart(&mut self, product: ProductKey) {
        let before = self.lines.len();

        self.lines.retain(|line| line.product != product);

        if self.lines.len() != before {
            debug!(?product, "removed from cart");
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero removes the line and quantities above the product's stock are
    /// clamped to it. Products without a line are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if the product is not in the catalog.
    pub fn update_quantity(
        &mut self,
        catalog: &Catalog<'_>,
        product: ProductKey,
        quantity: u32,
    ) -> Result<(), CartError> {
        let meta = lookup(catalog, product)?;

        if quantity == 0 {
            self.remove_from_cart(product);
            return Ok(());
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product == product) {
            line.quantity = quantity.min(meta.stock);

            debug!(product = %meta.id, requested = quantity, quantity = line.quantity, "updated quantity");
        }

        Ok(())
    }

    /// Apply a membership, or clear it with `None`.
    pub fn apply_membership(&mut self, membership: Option<Membership>) {
        debug!(
            membership = membership.as_ref().map(|membership| membership.code.as_str()),
            "applied membership"
        );

        self.membership = membership;
    }

    /// Apply a coupon, or clear it with `None`.
    pub fn apply_coupon(&mut self, coupon: Option<Coupon<'a>>) {
        debug!(
            coupon = coupon.as_ref().map(|coupon| coupon.code.as_str()),
            "applied coupon"
        );

        self.coupon = coupon;
    }

    /// Remove every line. The membership and coupon selections are kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

fn lookup<'c, 'a>(catalog: &'c Catalog<'a>, product: ProductKey) -> Result<&'c Product<'a>, CartError> {
    catalog
        .get(product)
        .ok_or(CartError::UnknownProduct(product))
}
