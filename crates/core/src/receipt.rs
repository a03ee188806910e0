//! Receipt

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError, totals::CartTotals},
    catalog::Catalog,
    display::{format_price, format_rate},
    products::ProductKey,
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error pricing the cart.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Error finding a product in the product catalog.
    #[error("Missing product")]
    MissingProduct(ProductKey),

    /// IO error
    #[error("IO error")]
    IO,
}

/// A priced cart line on the receipt.
#[derive(Debug, Clone)]
pub struct ReceiptLine<'a> {
    /// Product name
    pub name: String,

    /// Units purchased
    pub quantity: u32,

    /// Unit price
    pub unit_price: Money<'a, Currency>,

    /// Tier rate applied to the line
    pub rate: Decimal,

    /// Line total after the tier discount
    pub total: Money<'a, Currency>,
}

/// Order summary for a cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    lines: Vec<ReceiptLine<'a>>,
    totals: CartTotals<'a>,
    membership: Option<String>,
    coupon: Option<String>,
}

impl<'a> Receipt<'a> {
    /// Price every line of `cart` and compute its totals.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if a product is missing or pricing fails.
    pub fn from_cart(cart: &Cart<'_>, catalog: &Catalog<'a>) -> Result<Self, ReceiptError> {
        let mut lines = Vec::with_capacity(cart.lines().len());

        for line in cart.lines() {
            let product = catalog
                .get(line.product())
                .ok_or(ReceiptError::MissingProduct(line.product()))?;

            let pricing = cart.price_line(catalog, line)?;

            lines.push(ReceiptLine {
                name: product.name.clone(),
                quantity: line.quantity(),
                unit_price: product.price,
                rate: pricing.rate,
                total: pricing.total,
            });
        }

        Ok(Self {
            lines,
            totals: cart.calculate_total(catalog)?,
            membership: cart
                .selected_membership()
                .map(|membership| format!("{} ({})", membership.name, membership.discount_label())),
            coupon: cart
                .selected_coupon()
                .map(|coupon| format!("{} ({})", coupon.name, coupon.value_label())),
        })
    }

    /// Priced lines, in cart order.
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Order totals.
    pub fn totals(&self) -> &CartTotals<'a> {
        &self.totals
    }

    /// Writes the receipt as a table followed by the order summary.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit Price", "Discount", "Total"]);

        for line in &self.lines {
            builder.push_record([
                line.name.clone(),
                line.quantity.to_string(),
                format_price(&line.unit_price),
                if line.rate.is_zero() {
                    String::new()
                } else {
                    format_rate(line.rate)
                },
                format_price(&line.total),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        if let Some(membership) = &self.membership {
            writeln!(out, " Membership: {membership}").map_err(|_err| ReceiptError::IO)?;
        }

        if let Some(coupon) = &self.coupon {
            writeln!(out, " Coupon: {coupon}").map_err(|_err| ReceiptError::IO)?;
        }

        writeln!(
            out,
            " Subtotal: {}\n Discount: -{}\n Total: {}",
            format_price(&self.totals.total_before_discount),
            format_price(&self.totals.total_discount),
            format_price(&self.totals.total_after_discount),
        )
        .map_err(|_err| ReceiptError::IO)
    }
}
