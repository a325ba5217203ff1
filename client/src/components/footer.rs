//! Static site footer with internal navigation links.

use leptos::prelude::*;

use crate::catalog;

/// Site-wide footer. Fully static content; no props, no state.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <nav class="footer__column" aria-label="Shop">
                    <h3>"Shop"</h3>
                    {catalog::CATEGORIES
                        .iter()
                        .map(|category| {
                            view! { <a href=catalog::category_path(category)>{category.name}</a> }
                        })
                        .collect_view()}
                </nav>
                <nav class="footer__column" aria-label="Account">
                    <h3>"Account"</h3>
                    <a href="/account">"Profile"</a>
                    <a href="/cart">"Cart"</a>
                    <a href="/login">"Sign in"</a>
                </nav>
            </div>
            <p class="footer__copy">"© 2026 Storefront Supply Co. All rights reserved."</p>
        </footer>
    }
}
