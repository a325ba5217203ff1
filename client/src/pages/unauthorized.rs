//! Shown when an authenticated user lacks the role for a route.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="page page--unauthorized">
            <h1>"No access"</h1>
            <p>"Your account does not have permission to view that page."</p>
            <p>
                <a href="/">"Back to the storefront"</a>
            </p>
        </div>
    }
}
