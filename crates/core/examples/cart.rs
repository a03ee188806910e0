//! Cart Receipt Example
//!
//! Loads a fixture set, fills a cart and prints its receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-a` to add product ids (repeatable or comma separated)
//! Use `-m` / `-c` to apply a membership or coupon by code

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use trolley::{
    cart::Cart, fixtures::Fixture, receipt::Receipt, selection::select_by_code,
    utils::ExampleCartArgs,
};

/// Cart Receipt Example
pub fn main() -> Result<()> {
    let args = ExampleCartArgs::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(true))
        .with(EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    let fixture = Fixture::from_set(&args.fixture)
        .with_context(|| format!("loading fixture set '{}'", args.fixture))?;

    let catalog = fixture.catalog()?;
    let mut cart = Cart::new();

    for id in &args.add {
        let Some(key) = catalog.key_for(id) else {
            warn!(product = %id, "unknown product id, skipping");
            continue;
        };

        if let Err(error) = cart.add_to_cart(catalog, key) {
            warn!(product = %id, %error, "could not add product");
        }
    }

    if let Some(code) = args.membership.as_deref() {
        cart.apply_membership(select_by_code(fixture.memberships(), code).cloned());
    }

    if let Some(code) = args.coupon.as_deref() {
        cart.apply_coupon(select_by_code(fixture.coupons(), code).cloned());
    }

    let receipt = Receipt::from_cart(&cart, catalog)?;

    receipt.write_to(io::stdout().lock())?;

    Ok(())
}
