//! Session store — current identity and loading flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read this store to coordinate
//! login redirects and identity-dependent rendering. Provider auth events
//! are the sole mutator; nothing else writes `user` or `loading`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::Identity;
use crate::provider::{AuthEvent, IdentityApi as _, ProviderClient};

/// Session state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Before any provider event: no user, still loading.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Apply one provider event. After any event the store reflects that
    /// event's identity and is no longer loading.
    pub fn apply_event(&mut self, event: &AuthEvent) {
        self.user = event.identity().cloned();
        self.loading = false;
    }

    /// Role of the current user, if one is signed in.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.role.as_str())
    }
}

/// Wire a provider subscription into a context-provided session signal.
///
/// The subscription is released on owner cleanup, so no events are applied
/// after teardown regardless of how teardown was triggered.
pub fn provide_session(provider: &ProviderClient) -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::default());
    let subscription = provider.subscribe(Arc::new(move |event: &AuthEvent| {
        session.update(|state| state.apply_event(event));
    }));
    on_cleanup(move || subscription.unsubscribe());
    provide_context(session);
    session
}

/// Delegate sign-out to the provider. Local state changes only through the
/// resulting provider event.
pub fn sign_out(provider: &ProviderClient) {
    let provider = provider.clone();
    leptos::task::spawn_local(async move { provider.sign_out().await });
}
