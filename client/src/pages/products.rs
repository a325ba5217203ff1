//! Product browsing pages — category index and per-category listings.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog;
use crate::components::error_display::ErrorDisplay;
use crate::components::footer::Footer;
use crate::state::cart::{CartState, format_price_cents};

/// Category index listing every category card.
#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="page page--products">
            <h1>"Shop by category"</h1>
            <section class="category-grid">
                {catalog::CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <a class="category-card" href=catalog::category_path(category)>
                                <h2>{category.name}</h2>
                                <p>{category.blurb}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
            <Footer/>
        </div>
    }
}

/// Listing for one category, resolved from the `slug` route parameter.
/// Unknown slugs render the error widget instead of a listing.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let cart = expect_context::<RwSignal<CartState>>();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        <div class="page page--category">
            {move || match catalog::find(&slug()) {
                None => view! {
                    <ErrorDisplay message=format!("No such category: {}", slug())/>
                }
                .into_any(),
                Some(category) => view! {
                    <h1>{category.name}</h1>
                    <p class="category__blurb">{category.blurb}</p>
                    <ul class="product-list">
                        {catalog::products_in(category.slug)
                            .map(|product| {
                                view! {
                                    <li class="product-list__item">
                                        <span class="product-list__name">{product.name}</span>
                                        <span class="product-list__price">
                                            {format_price_cents(u64::from(product.price_cents))}
                                        </span>
                                        <button
                                            class="product-list__add"
                                            on:click=move |_| {
                                                cart.update(|cart| {
                                                    cart.add(product.sku, product.name, product.price_cents);
                                                });
                                            }
                                        >
                                            "Add to cart"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
            <Footer/>
        </div>
    }
}
