use std::sync::Arc;

use leptos::prelude::*;
use tracing::warn;

use trolley::{
    cart::Cart,
    catalog::Catalog,
    discounts::max_advertised_discount,
    display::{format_price, format_rate},
    products::ProductKey,
    search::search_products,
    stock::remaining_stock,
};

/// UI model for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Catalog key.
    pub key: ProductKey,

    /// Stable product id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Display price.
    pub price: String,

    /// Units still available given the current cart.
    pub remaining: i64,

    /// Largest advertised tier discount, when the product has tiers.
    pub max_discount: Option<String>,

    /// One line per discount tier.
    pub tiers: Vec<String>,
}

impl ProductCard {
    /// Whether the add button should be disabled.
    pub fn is_sold_out(&self) -> bool {
        self.remaining <= 0
    }

    /// Stock line shown under the price.
    pub fn stock_label(&self) -> String {
        if self.is_sold_out() {
            "품절".to_string()
        } else {
            format!("재고 {}개", self.remaining)
        }
    }

    /// Add button text.
    pub fn button_label(&self) -> &'static str {
        if self.is_sold_out() {
            "품절"
        } else {
            "장바구니 담기"
        }
    }
}

/// Build the cards for products matching `keyword`, in catalog order.
pub fn product_cards(catalog: &Catalog<'_>, cart: &Cart<'_>, keyword: &str) -> Vec<ProductCard> {
    search_products(catalog, keyword)
        .into_iter()
        .filter_map(|key| {
            let product = catalog.get(key)?;
            let max_rate = max_advertised_discount(&product.discounts);

            Some(ProductCard {
                key,
                id: product.id.clone(),
                name: product.name.clone(),
                price: format_price(&product.price),
                remaining: remaining_stock(cart, key, product),
                max_discount: (!max_rate.is_zero())
                    .then(|| format!("최대 {} 할인", format_rate(max_rate))),
                tiers: product
                    .discounts
                    .iter()
                    .map(|tier| {
                        format!("{}개 이상: {} 할인", tier.quantity, format_rate(tier.rate))
                    })
                    .collect(),
            })
        })
        .collect()
}

fn add_product(cart: &mut Cart<'static>, catalog: &Catalog<'static>, key: ProductKey) {
    if let Err(error) = cart.add_to_cart(catalog, key) {
        // No subscriber is installed in the browser build; this event is dropped unless one is added.
        warn!(%error, "failed to add product to cart");
    }
}

fn render_tiers(tiers: Vec<String>) -> AnyView {
    if tiers.is_empty() {
        return ().into_any();
    }

    view! {
        <ul class="product-tiers">
            {tiers.into_iter().map(|tier| view! { <li>{tier}</li> }).collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn ProductCardView(
    card: ProductCard,
    catalog: Arc<Catalog<'static>>,
    cart: RwSignal<Cart<'static>>,
) -> impl IntoView {
    let key = card.key;
    let sold_out = card.is_sold_out();
    let stock_label = card.stock_label();
    let button_label = card.button_label();
    let stock_class = if sold_out {
        "product-stock product-stock-out"
    } else {
        "product-stock"
    };

    view! {
        <li class="product-card" data-product-id=card.id>
            <div class="product-card-header">
                <span class="product-name">{card.name}</span>
                <span class="product-price">{card.price}</span>
            </div>
            <p class=stock_class>{stock_label}</p>
            {card
                .max_discount
                .map(|label| view! { <p class="product-max-discount">{label}</p> })}
            {render_tiers(card.tiers)}
            <button
                type="button"
                class="add-button"
                disabled=sold_out
                on:click=move |_| {
                    cart.update(|cart| add_product(cart, &catalog, key));
                }
            >
                {button_label}
            </button>
        </li>
    }
}

/// Left pane: search box and product cards.
#[component]
pub fn ProductsPanel(
    catalog: Arc<Catalog<'static>>,
    cart: RwSignal<Cart<'static>>,
    keyword: RwSignal<String>,
) -> impl IntoView {
    view! {
        <section class="products-panel">
            <h2 class="panel-title">"상품 목록"</h2>
            <input
                type="search"
                class="product-search"
                placeholder="상품명 검색"
                prop:value=move || keyword.get()
                on:input=move |ev| keyword.set(event_target_value(&ev))
            />
            <ul class="products-list">
                {move || {
                    let cards = keyword
                        .with(|keyword| cart.with(|cart| product_cards(&catalog, cart, keyword)));

                    if cards.is_empty() {
                        return view! { <li class="products-empty">"검색 결과가 없습니다."</li> }
                            .into_any();
                    }

                    cards
                        .into_iter()
                        .map(|card| {
                            view! {
                                <ProductCardView
                                    card=card
                                    catalog=Arc::clone(&catalog)
                                    cart=cart
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </section>
    }
}
