//! Cart persistence in `localStorage`.
//!
//! Best-effort browser-only behavior; SSR paths no-op so server rendering
//! stays deterministic. A cart that fails to parse is discarded.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "storefront_cart";

use crate::state::cart::CartState;

/// Load the persisted cart, if any.
#[must_use]
pub fn load() -> Option<CartState> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the cart. Failures are ignored.
pub fn save(cart: &CartState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Ok(raw) = serde_json::to_string(cart) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cart;
    }
}
