//! Public landing page with category navigation.

use leptos::prelude::*;

use crate::catalog;
use crate::components::footer::Footer;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="hero">
                <h1>"Storefront Supply Co."</h1>
                <p class="hero__tagline">"Durable goods for everyday life."</p>
                <a class="hero__cta" href="/products">"Shop all categories"</a>
            </section>
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
