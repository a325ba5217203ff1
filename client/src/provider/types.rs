//! Provider capability types — events, errors, subscriptions, OAuth kinds.
//!
//! DESIGN
//! ======
//! `IdentityApi` is the seam between the storefront and the external
//! identity/storage service. Consumers never talk to a concrete backend;
//! they hold a client implementing this trait and react to [`AuthEvent`]s
//! delivered through their subscription.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use crate::net::types::Identity;

/// Auth-state change emitted by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// A user signed in, or an existing session was restored.
    SignedIn(Identity),
    /// The session ended.
    SignedOut,
    /// The provider refreshed the session token for the same user.
    TokenRefreshed(Identity),
}

impl AuthEvent {
    /// The identity carried by this event, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) | Self::TokenRefreshed(identity) => Some(identity),
            Self::SignedOut => None,
        }
    }
}

/// Callback invoked for every auth-state change.
pub type AuthCallback = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

pub(crate) type SubscriberMap = HashMap<u64, AuthCallback>;

/// Handle to a registered auth-state callback.
///
/// `unsubscribe` removes the callback from the provider's registry; no
/// further events are delivered afterwards. Dropping the handle without
/// unsubscribing leaves the callback registered.
pub struct AuthSubscription {
    id: u64,
    subscribers: Weak<Mutex<SubscriberMap>>,
}

impl AuthSubscription {
    pub(crate) fn new(id: u64, subscribers: Weak<Mutex<SubscriberMap>>) -> Self {
        Self { id, subscribers }
    }

    /// Release the subscription. Safe to call after the provider is gone.
    pub fn unsubscribe(self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            if let Ok(mut map) = subscribers.lock() {
                map.remove(&self.id);
            }
        }
    }
}

/// OAuth providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    /// Query-parameter slug understood by the provider's authorize endpoint.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }

    /// Human-readable label for sign-in buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Github => "GitHub",
        }
    }
}

/// Errors surfaced by provider calls. Returned as values, never panics;
/// callers decide whether to show them through the error display widget.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("identity provider not configured: set STOREFRONT_AUTH_URL and STOREFRONT_AUTH_KEY")]
    NotConfigured,
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("storage upload failed: {0}")]
    Upload(String),
}

/// Capability set of the external identity/storage provider.
///
/// Implemented by [`super::ProviderClient`] over two backends: a live
/// REST-backed variant and a degraded in-memory stand-in selected when
/// endpoint configuration is absent.
#[async_trait::async_trait(?Send)]
pub trait IdentityApi {
    /// Register an auth-state callback. Each subscription is primed with
    /// the provider's current session so new consumers leave their
    /// loading state.
    fn subscribe(&self, callback: AuthCallback) -> AuthSubscription;

    /// Begin an OAuth sign-in flow.
    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<(), ProviderError>;

    /// End the current session. Consumers observe the result through the
    /// event stream, not the call itself.
    async fn sign_out(&self);

    /// Resolve the currently authenticated user, if any.
    async fn get_user(&self) -> Option<Identity>;

    /// Upload an object to the provider's storage service.
    async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), ProviderError>;

    /// Public download URL for a stored object.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}
