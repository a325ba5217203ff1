//! Theme application to the document root.
//!
//! Writes each theme token to a CSS custom property on the `<html>`
//! element. Requires a browser environment; SSR paths safely no-op to
//! keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

/// Custom property names mirroring each theme field, in field order.
pub const THEME_VARS: [&str; 4] = ["--color-primary", "--color-secondary", "--color-accent", "--font-body"];

/// Pairs of (custom property, value) for the given theme.
#[must_use]
pub fn css_variables(theme: &Theme) -> [(&'static str, String); 4] {
    [
        (THEME_VARS[0], theme.primary.clone()),
        (THEME_VARS[1], theme.secondary.clone()),
        (THEME_VARS[2], theme.accent.clone()),
        (THEME_VARS[3], theme.font.clone()),
    ]
}

/// Apply the theme to the document root element.
pub fn apply(theme: &Theme) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let style = root.style();
        for (name, value) in css_variables(theme) {
            let _ = style.set_property(name, &value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
