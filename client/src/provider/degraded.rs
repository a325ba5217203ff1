//! Degraded in-memory stand-in used when provider credentials are absent.
//!
//! Reports no user, resolves sign-in attempts with a fixed configuration
//! error, and performs no-op storage operations. The store above it sees
//! the same shape as the live backend.

#[cfg(test)]
#[path = "degraded_test.rs"]
mod degraded_test;

use crate::net::types::Identity;

use super::types::{OAuthProvider, ProviderError};

/// Stand-in backend. Holds no state; every call has a fixed outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct DegradedBackend;

impl DegradedBackend {
    pub(crate) fn sign_in_with_oauth(self, _provider: OAuthProvider) -> Result<(), ProviderError> {
        Err(ProviderError::NotConfigured)
    }

    pub(crate) fn get_user(self) -> Option<Identity> {
        None
    }

    pub(crate) fn upload(self) -> Result<(), ProviderError> {
        Err(ProviderError::NotConfigured)
    }

    pub(crate) fn public_url(self) -> String {
        String::new()
    }
}
