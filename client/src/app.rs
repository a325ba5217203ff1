//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::account::AccountPage;
use crate::pages::admin::AdminPage;
use crate::pages::cart::CartPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::products::{CategoryPage, ProductsPage};
use crate::pages::unauthorized::UnauthorizedPage;
use crate::provider::ProviderClient;
use crate::state::cart::CartState;
use crate::state::session::provide_session;
use crate::state::theme::Theme;
use crate::util::{cart_storage, theme as theme_dom};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the provider client, session, theme, and cart contexts and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let provider = ProviderClient::from_build_env();
    provide_context(provider.clone());
    provide_session(&provider);

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);
    // Mirror every theme change (including the initial value) onto the
    // document root's custom properties.
    Effect::new(move || theme_dom::apply(&theme.get()));

    let cart = RwSignal::new(cart_storage::load().unwrap_or_default());
    provide_context(cart);
    Effect::new(move || cart_storage::save(&cart.get()));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront Supply Co."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("products") view=ProductsPage/>
                <Route path=(StaticSegment("products"), ParamSegment("slug")) view=CategoryPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
