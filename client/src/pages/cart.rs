//! Cart page — line items, quantity controls, running total.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::state::cart::{CartState, format_price_cents};

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="page page--cart">
            <h1>"Your cart"</h1>
            <Show
                when=move || !cart.get().is_empty()
                fallback=|| {
                    view! {
                        <p class="cart__empty">
                            "Your cart is empty. " <a href="/products">"Browse the catalog"</a> "."
                        </p>
                    }
                }
            >
                <ul class="cart-list">
                    {move || {
                        cart.get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let decrement_id = item.product_id.clone();
                                let increment_id = item.product_id.clone();
                                let remove_id = item.product_id.clone();
                                let line_total = u64::from(item.unit_price_cents) * u64::from(item.quantity);
                                let quantity = item.quantity;
                                view! {
                                    <li class="cart-list__item">
                                        <span class="cart-list__name">{item.name.clone()}</span>
                                        <span class="cart-list__controls">
                                            <button on:click=move |_| {
                                                cart.update(|c| c.set_quantity(&decrement_id, quantity.saturating_sub(1)));
                                            }>"−"</button>
                                            <span class="cart-list__quantity">{quantity}</span>
                                            <button on:click=move |_| {
                                                cart.update(|c| c.set_quantity(&increment_id, quantity + 1));
                                            }>"+"</button>
                                        </span>
                                        <span class="cart-list__price">{format_price_cents(line_total)}</span>
                                        <button
                                            class="cart-list__remove"
                                            on:click=move |_| cart.update(|c| c.remove(&remove_id))
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <p class="cart__total">
                    "Total: " {move || format_price_cents(cart.get().total_cents())}
                    " (" {move || cart.get().count()} " items)"
                </p>
            </Show>
            <Footer/>
        </div>
    }
}
