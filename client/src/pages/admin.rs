//! Admin page — store appearance controls, gated to the admin role.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::guard::Protected;
use crate::state::theme::{Theme, ThemePatch};

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Protected allowed_roles=vec!["admin".to_owned()]>
            <AdminPanel/>
        </Protected>
    }
}

#[component]
fn AdminPanel() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let current = theme.get_untracked();
    let primary = RwSignal::new(current.primary);
    let secondary = RwSignal::new(current.secondary);
    let accent = RwSignal::new(current.accent);
    let font = RwSignal::new(current.font);

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let field = |value: String| (!value.trim().is_empty()).then_some(value);
        let patch = ThemePatch {
            primary: field(primary.get()),
            secondary: field(secondary.get()),
            accent: field(accent.get()),
            font: field(font.get()),
        };
        theme.update(|theme| theme.apply_patch(&patch));
    };

    view! {
        <div class="page page--admin">
            <h1>"Store appearance"</h1>
            <form class="theme-form" on:submit=on_apply>
                <label>
                    "Primary color"
                    <input prop:value=move || primary.get() on:input=move |ev| primary.set(event_target_value(&ev))/>
                </label>
                <label>
                    "Secondary color"
                    <input prop:value=move || secondary.get() on:input=move |ev| secondary.set(event_target_value(&ev))/>
                </label>
                <label>
                    "Accent color"
                    <input prop:value=move || accent.get() on:input=move |ev| accent.set(event_target_value(&ev))/>
                </label>
                <label>
                    "Body font"
                    <input prop:value=move || font.get() on:input=move |ev| font.set(event_target_value(&ev))/>
                </label>
                <button type="submit">"Apply theme"</button>
            </form>
            <Footer/>
        </div>
    }
}
