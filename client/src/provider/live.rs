//! Live REST backend for the identity/storage provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the access
//! token persisted in `localStorage`. Server-side (SSR): inert stubs —
//! identity resolution is only meaningful in the browser, so SSR renders
//! as "still loading" until hydration resolves the session.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use crate::net::types::Identity;

use super::config::ProviderConfig;
use super::types::{OAuthProvider, ProviderError};

#[cfg(feature = "hydrate")]
const TOKEN_STORAGE_KEY: &str = "storefront_access_token";

/// REST-backed provider backend.
#[derive(Clone, Debug)]
pub struct LiveBackend {
    config: ProviderConfig,
}

impl LiveBackend {
    pub(crate) fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Begin the OAuth flow by navigating the browser to the provider's
    /// authorize URL. The provider redirects back with the token in the
    /// URL fragment, which [`Self::capture_fragment_token`] picks up.
    pub(crate) fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or_else(|| ProviderError::Request("no window".to_owned()))?;
            let origin = window
                .location()
                .origin()
                .map_err(|_| ProviderError::Request("origin unavailable".to_owned()))?;
            let url = self.config.authorize_url(provider, &origin);
            window
                .location()
                .set_href(&url)
                .map_err(|_| ProviderError::Request("navigation failed".to_owned()))?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = provider;
            Err(ProviderError::Request("sign-in is only available in the browser".to_owned()))
        }
    }

    /// Resolve the current user for the stored token. A rejected token is
    /// cleared so later calls short-circuit.
    pub(crate) async fn get_user(&self) -> Option<Identity> {
        #[cfg(feature = "hydrate")]
        {
            let token = stored_token()?;
            let resp = gloo_net::http::Request::get(&self.config.user_url())
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .ok()?;
            if !resp.ok() {
                clear_token();
                return None;
            }
            resp.json::<Identity>().await.ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// End the provider session and forget the stored token. Failures to
    /// reach the provider still clear local state.
    pub(crate) async fn sign_out(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = stored_token() {
                let _ = gloo_net::http::Request::post(&self.config.logout_url())
                    .header("apikey", &self.config.anon_key)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await;
            }
            clear_token();
        }
    }

    pub(crate) async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let token = stored_token().ok_or_else(|| ProviderError::Upload("not signed in".to_owned()))?;
            let body = js_sys::Uint8Array::from(bytes.as_slice());
            let resp = gloo_net::http::Request::post(&self.config.object_url(bucket, path))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {token}"))
                .header("Content-Type", content_type)
                .body(body)
                .map_err(|e| ProviderError::Upload(e.to_string()))?
                .send()
                .await
                .map_err(|e| ProviderError::Upload(e.to_string()))?;
            if !resp.ok() {
                return Err(ProviderError::Upload(format!("status {}", resp.status())));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bucket, path, bytes, content_type);
            Err(ProviderError::Upload("uploads are only available in the browser".to_owned()))
        }
    }

    pub(crate) fn public_url(&self, bucket: &str, path: &str) -> String {
        self.config.public_object_url(bucket, path)
    }

    /// Persist an access token arriving in the post-OAuth URL fragment and
    /// strip the fragment from the address bar.
    pub(crate) fn capture_fragment_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else { return };
            let Ok(fragment) = window.location().hash() else { return };
            if let Some(token) = access_token_from_fragment(&fragment) {
                store_token(&token);
                let _ = window.location().set_hash("");
            }
        }
    }
}

/// Extract `access_token` from an OAuth redirect fragment like
/// `#access_token=abc&token_type=bearer&expires_in=3600`.
pub(crate) fn access_token_from_fragment(fragment: &str) -> Option<String> {
    let trimmed = fragment.strip_prefix('#').unwrap_or(fragment);
    trimmed.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "access_token" && !value.is_empty()).then(|| value.to_owned())
    })
}

#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(TOKEN_STORAGE_KEY).ok().flatten().filter(|t| !t.is_empty())
}

#[cfg(feature = "hydrate")]
fn store_token(token: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

#[cfg(feature = "hydrate")]
fn clear_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
