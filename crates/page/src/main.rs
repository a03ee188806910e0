//! Trolley shopping-cart page

use std::sync::Arc;

use leptos::{callback::Callback, prelude::*};

use trolley::{
    cart::Cart,
    catalog::Catalog,
    coupons::Coupon,
    fixtures::{Fixture, FixtureError},
    memberships::Membership,
};

mod cart;
mod preserved;
mod products;
mod selectors;

const PRODUCTS_FIXTURE_YAML: &str = include_str!("../../../fixtures/products/demo.yml");
const MEMBERSHIPS_FIXTURE_YAML: &str = include_str!("../../../fixtures/memberships/demo.yml");
const COUPONS_FIXTURE_YAML: &str = include_str!("../../../fixtures/coupons/demo.yml");

/// Catalog and selectable modifiers loaded at startup.
#[derive(Debug)]
struct AppData {
    /// Products, in display order.
    catalog: Arc<Catalog<'static>>,

    /// Membership options.
    memberships: Arc<Vec<Membership>>,

    /// Coupon options.
    coupons: Arc<Vec<Coupon<'static>>>,
}

impl AppData {
    fn load(products: &str, memberships: &str, coupons: &str) -> Result<Self, FixtureError> {
        let mut fixture = Fixture::new();

        fixture
            .load_products_str(products)?
            .load_memberships_str(memberships)?
            .load_coupons_str(coupons)?;

        let (catalog, memberships, coupons) = fixture.into_parts()?;

        Ok(Self {
            catalog: Arc::new(catalog),
            memberships: Arc::new(memberships),
            coupons: Arc::new(coupons),
        })
    }
}

/// Two-pane cart page: products on the left, the cart on the right.
#[component]
fn CartPage(app_data: AppData) -> impl IntoView {
    let cart = RwSignal::new(Cart::new());
    let keyword = RwSignal::new(String::new());

    let on_membership_change = Callback::new(move |membership: Option<Membership>| {
        cart.update(|cart| cart.apply_membership(membership));
    });
    let on_coupon_change = Callback::new(move |coupon: Option<Coupon<'static>>| {
        cart.update(|cart| cart.apply_coupon(coupon));
    });

    view! {
        <div class="cart-page">
            <products::ProductsPanel
                catalog=Arc::clone(&app_data.catalog)
                cart=cart
                keyword=keyword
            />
            <cart::CartPanel
                catalog=app_data.catalog
                cart=cart
                memberships=app_data.memberships
                coupons=app_data.coupons
                on_membership_change=on_membership_change
                on_coupon_change=on_coupon_change
            />
        </div>
    }
}

/// Main page shell.
#[component]
fn App() -> impl IntoView {
    let page = match AppData::load(
        PRODUCTS_FIXTURE_YAML,
        MEMBERSHIPS_FIXTURE_YAML,
        COUPONS_FIXTURE_YAML,
    ) {
        Ok(app_data) => view! { <CartPage app_data=app_data /> }.into_any(),
        Err(error) => view! {
            <div class="error-panel">
                <p>{format!("상품 정보를 불러오지 못했습니다: {error}")}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <main class="page">
            <h1 class="page-title">"장바구니"</h1>
            {page}
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
