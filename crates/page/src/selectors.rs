//! Membership and coupon pickers
//!
//! Both widgets key their options by code. The blank option clears the selection.

use std::sync::Arc;

use leptos::{
    callback::{Callable, Callback},
    prelude::*,
};

use trolley::{
    coupons::Coupon,
    memberships::Membership,
    selection::{Selectable, select_by_code},
};

use crate::preserved::use_preserved_callback;

/// Option label for a membership, e.g. `골드 (10%)`.
pub fn membership_label(membership: &Membership) -> String {
    format!("{} ({})", membership.name, membership.discount_label())
}

/// Option label for a coupon, e.g. `1000원 할인 (1000원)`.
pub fn coupon_label(coupon: &Coupon<'_>) -> String {
    format!("{} ({})", coupon.name, coupon.value_label())
}

/// Confirmation line shown while a membership is applied.
pub fn membership_confirmation(selected: Option<&Membership>) -> Option<String> {
    selected.map(|membership| format!("{} 할인이 적용되었습니다.", membership_label(membership)))
}

/// Confirmation line shown while a coupon is applied.
pub fn coupon_confirmation(selected: Option<&Coupon<'_>>) -> Option<String> {
    selected.map(|coupon| format!("{} 쿠폰이 적용되었습니다.", coupon_label(coupon)))
}

/// Resolve a `<select>` value to an owned option.
pub fn resolve_selection<T: Selectable + Clone>(options: &[T], code: &str) -> Option<T> {
    select_by_code(options, code).cloned()
}

fn is_selected<T: Selectable>(selected: Option<&T>, code: &str) -> bool {
    selected.is_some_and(|option| option.code() == code)
}

#[component]
fn SelectOption(label: String, code: String, selected: Signal<bool>) -> impl IntoView {
    view! {
        <option value=code prop:selected=move || selected.get()>
            {label}
        </option>
    }
}

/// Membership picker with a confirmation line for the applied membership.
#[component]
pub fn ApplyMembership(
    memberships: Arc<Vec<Membership>>,
    #[prop(into)] selected: Signal<Option<Membership>>,
    on_change: Signal<Callback<Option<Membership>>>,
) -> impl IntoView {
    let handle_change = use_preserved_callback(on_change);
    let options = Arc::clone(&memberships);

    view! {
        <div class="selector">
            <label class="selector-label" for="membership-select">
                "회원 등급"
            </label>
            <select
                id="membership-select"
                class="selector-input"
                on:change=move |ev| {
                    handle_change.run(resolve_selection(&options, &event_target_value(&ev)));
                }
            >
                <option value="" prop:selected=move || selected.with(Option::is_none)>
                    "선택 안 함"
                </option>
                {memberships
                    .iter()
                    .map(|membership| {
                        let code = membership.code.clone();
                        let option_code = code.clone();

                        view! {
                            <SelectOption
                                label=membership_label(membership)
                                code=code
                                selected=Signal::derive(move || {
                                    selected.with(|current| is_selected(current.as_ref(), &option_code))
                                })
                            />
                        }
                    })
                    .collect_view()}
            </select>
            {move || {
                selected
                    .with(|current| membership_confirmation(current.as_ref()))
                    .map(|text| view! { <p class="selector-confirmation">{text}</p> })
            }}
        </div>
    }
}

/// Coupon picker with a confirmation line for the applied coupon.
#[component]
pub fn ApplyCoupon(
    coupons: Arc<Vec<Coupon<'static>>>,
    #[prop(into)] selected: Signal<Option<Coupon<'static>>>,
    on_change: Signal<Callback<Option<Coupon<'static>>>>,
) -> impl IntoView {
    let handle_change = use_preserved_callback(on_change);
    let options = Arc::clone(&coupons);

    view! {
        <div class="selector">
            <label class="selector-label" for="coupon-select">
                "쿠폰"
            </label>
            <select
                id="coupon-select"
                class="selector-input"
                on:change=move |ev| {
                    handle_change.run(resolve_selection(&options, &event_target_value(&ev)));
                }
            >
                <option value="" prop:selected=move || selected.with(Option::is_none)>
                    "선택 안 함"
                </option>
                {coupons
                    .iter()
                    .map(|coupon| {
                        let code = coupon.code.clone();
                        let option_code = code.clone();

                        view! {
                            <SelectOption
                                label=coupon_label(coupon)
                                code=code
                                selected=Signal::derive(move || {
                                    selected.with(|current| is_selected(current.as_ref(), &option_code))
                                })
                            />
                        }
                    })
                    .collect_view()}
            </select>
            {move || {
                selected
                    .with(|current| coupon_confirmation(current.as_ref()))
                    .map(|text| view! { <p class="selector-confirmation">{text}</p> })
            }}
        </div>
    }
}
