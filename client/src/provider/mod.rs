//! Identity provider wrapper — capability trait plus live/degraded dispatch.
//!
//! DESIGN
//! ======
//! The external identity/storage service is consumed through the
//! [`IdentityApi`] trait. [`ProviderClient`] dispatches to one of two
//! backends selected at construction time: REST-backed when endpoint
//! configuration is present, an in-memory stand-in otherwise. Auth-state
//! changes fan out through a callback registry; unsubscribing guarantees
//! no further delivery.

pub mod config;
pub mod degraded;
pub mod live;
pub mod types;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::net::types::Identity;

use config::ProviderConfig;
use types::SubscriberMap;
pub use types::{AuthCallback, AuthEvent, AuthSubscription, IdentityApi, OAuthProvider, ProviderError};

enum Backend {
    Live(live::LiveBackend),
    Degraded(degraded::DegradedBackend),
}

struct ProviderInner {
    backend: Backend,
    subscribers: Arc<Mutex<SubscriberMap>>,
    next_subscriber_id: AtomicU64,
}

/// Concrete identity-provider client dispatching to the selected backend.
///
/// Cheap to clone; clones share the backend and subscriber registry.
#[derive(Clone)]
pub struct ProviderClient {
    inner: Arc<ProviderInner>,
}

impl ProviderClient {
    /// Build a client from build-time configuration, degrading when the
    /// provider endpoint variables are absent.
    #[must_use]
    pub fn from_build_env() -> Self {
        match ProviderConfig::from_build_env() {
            Some(config) => Self::live(config),
            None => {
                log::warn!("identity provider not configured; running degraded");
                Self::degraded()
            }
        }
    }

    /// Client backed by the provider's REST endpoints.
    #[must_use]
    pub fn live(config: ProviderConfig) -> Self {
        Self::with_backend(Backend::Live(live::LiveBackend::new(config)))
    }

    /// Client backed by the in-memory stand-in.
    #[must_use]
    pub fn degraded() -> Self {
        Self::with_backend(Backend::Degraded(degraded::DegradedBackend))
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            inner: Arc::new(ProviderInner {
                backend,
                subscribers: Arc::new(Mutex::new(SubscriberMap::new())),
                next_subscriber_id: AtomicU64::new(0),
            }),
        }
    }

    /// Whether this client is running against the degraded stand-in.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self.inner.backend, Backend::Degraded(_))
    }

    fn emit(&self, event: &AuthEvent) {
        // Callbacks are cloned out so none runs while the registry is locked.
        let callbacks: Vec<AuthCallback> = match self.inner.subscribers.lock() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => return,
        };
        for callback in callbacks {
            callback(event);
        }
    }

    async fn resolve_user(&self) -> Option<Identity> {
        match &self.inner.backend {
            Backend::Live(backend) => backend.get_user().await,
            Backend::Degraded(backend) => backend.get_user(),
        }
    }

    /// Resolve the current session once and emit the matching event so a
    /// new subscriber leaves its loading state.
    fn prime(&self) {
        match &self.inner.backend {
            Backend::Degraded(_) => self.emit(&AuthEvent::SignedOut),
            Backend::Live(backend) => {
                #[cfg(feature = "hydrate")]
                {
                    backend.capture_fragment_token();
                    let client = self.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let event = match client.resolve_user().await {
                            Some(identity) => AuthEvent::SignedIn(identity),
                            None => AuthEvent::SignedOut,
                        };
                        client.emit(&event);
                    });
                }
                // Without a browser there is no token to resolve; SSR output
                // stays in the loading state until hydration.
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = backend;
                }
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityApi for ProviderClient {
    fn subscribe(&self, callback: AuthCallback) -> AuthSubscription {
        let id = self.inner.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut map) = self.inner.subscribers.lock() {
            map.insert(id, callback);
        }
        let subscription = AuthSubscription::new(id, Arc::downgrade(&self.inner.subscribers));
        self.prime();
        subscription
    }

    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<(), ProviderError> {
        match &self.inner.backend {
            Backend::Live(backend) => backend.sign_in_with_oauth(provider),
            Backend::Degraded(backend) => backend.sign_in_with_oauth(provider),
        }
    }

    async fn sign_out(&self) {
        if let Backend::Live(backend) = &self.inner.backend {
            backend.sign_out().await;
        }
        self.emit(&AuthEvent::SignedOut);
    }

    async fn get_user(&self) -> Option<Identity> {
        self.resolve_user().await
    }

    async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), ProviderError> {
        match &self.inner.backend {
            Backend::Live(backend) => backend.upload(bucket, path, bytes, content_type).await,
            Backend::Degraded(backend) => backend.upload(),
        }
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        match &self.inner.backend {
            Backend::Live(backend) => backend.public_url(bucket, path),
            Backend::Degraded(backend) => backend.public_url(),
        }
    }
}
