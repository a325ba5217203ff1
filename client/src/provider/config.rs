//! Provider endpoint configuration.
//!
//! Two build-time variables carry the provider's endpoint URL and public
//! key. Absence of either selects the degraded stand-in backend rather
//! than failing startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use super::types::OAuthProvider;

/// Identity-provider endpoint configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL of the provider deployment (no trailing slash).
    pub url: String,
    /// Public (anonymous) API key sent with every request.
    pub anon_key: String,
}

impl ProviderConfig {
    /// Read configuration inlined at build time from `STOREFRONT_AUTH_URL`
    /// and `STOREFRONT_AUTH_KEY`. Returns `None` if either is missing or
    /// blank.
    #[must_use]
    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(
            option_env!("STOREFRONT_AUTH_URL").unwrap_or_default(),
            option_env!("STOREFRONT_AUTH_KEY").unwrap_or_default(),
        )
    }

    /// Build a config from raw parts, rejecting blank values.
    #[must_use]
    pub fn from_parts(url: &str, anon_key: &str) -> Option<Self> {
        let url = url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();
        if url.is_empty() || anon_key.is_empty() {
            return None;
        }
        Some(Self { url: url.to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Authorization URL starting an OAuth flow that returns to `redirect_to`.
    #[must_use]
    pub fn authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> String {
        format!(
            "{}/auth/v1/authorize?provider={}&redirect_to={redirect_to}",
            self.url,
            provider.slug()
        )
    }

    /// Endpoint resolving the current user for a bearer token.
    #[must_use]
    pub fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.url)
    }

    /// Endpoint ending the current session.
    #[must_use]
    pub fn logout_url(&self) -> String {
        format!("{}/auth/v1/logout", self.url)
    }

    /// Storage endpoint for uploading an object.
    #[must_use]
    pub fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{path}", self.url)
    }

    /// Public download URL for an object.
    #[must_use]
    pub fn public_object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.url)
    }
}
