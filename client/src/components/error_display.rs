//! Inline error message with an optional retry affordance.

use leptos::prelude::*;

/// Error panel. The retry control renders only when a callback is given;
/// retry policy itself belongs to the caller.
#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            <p class="error-display__message">{message}</p>
            <Show when=move || on_retry.is_some()>
                <button
                    class="error-display__retry"
                    on:click=move |_| {
                        if let Some(retry) = on_retry {
                            retry.run(());
                        }
                    }
                >
                    "Try again"
                </button>
            </Show>
        </div>
    }
}
