//! Loading indicator with three fixed size presets.

#[cfg(test)]
#[path = "spinner_test.rs"]
mod spinner_test;

use leptos::prelude::*;

/// Size presets for the loading indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    /// CSS modifier class for this preset.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Small => "spinner--small",
            Self::Medium => "spinner--medium",
            Self::Large => "spinner--large",
        }
    }
}

/// Spinning loading indicator with an optional caption.
#[component]
pub fn Spinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional)] caption: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("spinner {}", size.class()) role="status">
            <span class="spinner__ring" aria-hidden="true"></span>
            <Show when=move || !caption.is_empty()>
                <span class="spinner__caption">{caption}</span>
            </Show>
        </div>
    }
}
