//! Trolley
//!
//! Trolley is the pricing core behind a shopping-cart page: a product catalog with
//! volume discount tiers, keyword search, stock availability, membership and coupon
//! modifiers, and a cart aggregator that computes order totals.

pub mod cart;
pub mod catalog;
pub mod coupons;
pub mod discounts;
pub mod display;
pub mod fixtures;
pub mod memberships;
pub mod prelude;
pub mod products;
pub mod receipt;
pub mod search;
pub mod selection;
pub mod stock;
pub mod utils;
