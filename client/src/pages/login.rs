//! Login page offering OAuth sign-in through the identity provider.

use leptos::prelude::*;

use crate::provider::{OAuthProvider, ProviderClient};

#[component]
pub fn LoginPage() -> impl IntoView {
    let provider = expect_context::<ProviderClient>();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let sign_in = Callback::new(move |kind: OAuthProvider| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::provider::IdentityApi as _;

            let provider = provider.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = provider.sign_in_with_oauth(kind).await {
                    info.set(e.to_string());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&provider, kind);
            busy.set(false);
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Storefront Supply Co."</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <button
                    class="login-button"
                    disabled=move || busy.get()
                    on:click=move |_| sign_in.run(OAuthProvider::Google)
                >
                    {format!("Sign in with {}", OAuthProvider::Google.label())}
                </button>
                <button
                    class="login-button"
                    disabled=move || busy.get()
                    on:click=move |_| sign_in.run(OAuthProvider::Github)
                >
                    {format!("Sign in with {}", OAuthProvider::Github.label())}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
