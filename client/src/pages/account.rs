//! Account page — profile card, avatar upload, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Avatar uploads go through the
//! provider's storage interface; failures surface in the error widget with
//! a retry affordance that replays the last attempted upload.

use leptos::prelude::*;

use crate::components::error_display::ErrorDisplay;
use crate::components::footer::Footer;
use crate::components::guard::Protected;
use crate::provider::{IdentityApi as _, ProviderClient};
use crate::state::session::{self, SessionState};

const AVATAR_BUCKET: &str = "avatars";

/// Last attempted upload, kept so the retry control can replay it.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingUpload {
    bytes: Vec<u8>,
    content_type: String,
}

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <Protected>
            <AccountProfile/>
        </Protected>
    }
}

#[component]
fn AccountProfile() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let provider = expect_context::<ProviderClient>();

    let upload_error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(None::<PendingUpload>);
    let avatar_preview = RwSignal::new(None::<String>);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let run_upload = {
        let provider = provider.clone();
        Callback::new(move |upload: PendingUpload| {
            let Some(user_id) = session.get_untracked().user.map(|user| user.id) else {
                return;
            };
            upload_error.set(None);
            pending.set(Some(upload.clone()));

            let provider = provider.clone();
            leptos::task::spawn_local(async move {
                let path = format!("{user_id}/avatar");
                match provider.upload(AVATAR_BUCKET, &path, upload.bytes, &upload.content_type).await {
                    Ok(()) => {
                        avatar_preview.set(Some(provider.public_url(AVATAR_BUCKET, &path)));
                        pending.set(None);
                    }
                    Err(e) => upload_error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_retry = Callback::new(move |()| {
        if let Some(upload) = pending.get_untracked() {
            run_upload.run(upload);
        }
    });

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get() else { return };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let content_type = file.type_();
            leptos::task::spawn_local(async move {
                let Ok(buffer) = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await else {
                    return;
                };
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                run_upload.run(PendingUpload { bytes, content_type });
            });
        }
    };

    let sign_out_provider = provider.clone();
    let avatar_url = move || {
        avatar_preview
            .get()
            .or_else(|| session.get().user.and_then(|user| user.avatar_url))
    };

    view! {
        <div class="page page--account">
            <h1>"Your account"</h1>
            <section class="profile-card">
                <Show when=move || avatar_url().is_some()>
                    <img class="profile-card__avatar" src=move || avatar_url().unwrap_or_default() alt="Avatar"/>
                </Show>
                <p class="profile-card__name">
                    {move || session.get().user.map(|user| user.display_label().to_owned()).unwrap_or_default()}
                </p>
                <p class="profile-card__role">
                    "Role: " {move || session.get().role().unwrap_or("unknown").to_owned()}
                </p>
                <label class="profile-card__upload">
                    "Update avatar"
                    <input type="file" accept="image/*" node_ref=file_input on:change=on_file_change/>
                </label>
                <Show when=move || upload_error.get().is_some()>
                    <ErrorDisplay
                        message=upload_error.get().unwrap_or_default()
                        on_retry=on_retry
                    />
                </Show>
                <button class="profile-card__signout" on:click=move |_| session::sign_out(&sign_out_provider)>
                    "Sign out"
                </button>
            </section>
            <section class="order-history">
                <h2>"Order history"</h2>
                <p class="order-history__empty">"No orders yet."</p>
            </section>
            <Footer/>
        </div>
    }
}
