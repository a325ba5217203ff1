//! # client
//!
//! Leptos + WASM frontend for the storefront application.
//!
//! This crate contains pages, components, application state, the catalog
//! table, and the wrapper around the external identity/storage provider.
//! It is rendered server-side by the root `storefront` binary and hydrated
//! in the browser.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod provider;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
