//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, totals::CartTotals},
    catalog::{Catalog, CatalogError},
    coupons::{Coupon, CouponDiscount},
    discounts::{DiscountError, applied_discount, max_advertised_discount},
    display::{format_percentage, format_price, format_rate},
    fixtures::{Fixture, FixtureError},
    memberships::Membership,
    products::{DiscountTier, Product, ProductKey},
    receipt::{Receipt, ReceiptError},
    search::search_products,
    selection::{Selectable, select_by_code},
    stock::{is_sold_out, remaining_stock},
};
