//! Access gate for authenticated routes.
//!
//! DESIGN
//! ======
//! The gate derives one of four outcomes from the session store on every
//! re-evaluation: pending, redirect-to-login, redirect-to-unauthorized,
//! or render. It holds no state of its own beyond [`RedirectTracker`],
//! which records the last redirect acted upon so navigation fires exactly
//! once per distinct transition into a redirecting state rather than once
//! per re-render.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::{Spinner, SpinnerSize};
use crate::state::session::SessionState;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated-but-unauthorized visitors are sent.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Outcome of evaluating the gate against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still resolving; render a placeholder, no navigation.
    Pending,
    /// No user; navigate to the login page.
    RedirectLogin,
    /// User present but role not permitted; navigate to the unauthorized page.
    RedirectUnauthorized,
    /// Render children unchanged.
    Render,
}

/// Evaluate the gate. An empty role list admits any authenticated user.
#[must_use]
pub fn decide(session: &SessionState, allowed_roles: &[String]) -> GateDecision {
    if session.loading {
        return GateDecision::Pending;
    }
    let Some(user) = &session.user else {
        return GateDecision::RedirectLogin;
    };
    if allowed_roles.is_empty() || allowed_roles.iter().any(|role| role == &user.role) {
        GateDecision::Render
    } else {
        GateDecision::RedirectUnauthorized
    }
}

/// Tracks the last redirect issued so re-renders in the same state are
/// no-ops. Entering a non-redirecting state re-arms the tracker.
#[derive(Debug, Default)]
pub struct RedirectTracker {
    last: Option<&'static str>,
}

impl RedirectTracker {
    /// Observe a decision; returns the path to navigate to, if any.
    pub fn observe(&mut self, decision: GateDecision) -> Option<&'static str> {
        let target = match decision {
            GateDecision::RedirectLogin => Some(LOGIN_PATH),
            GateDecision::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
            GateDecision::Pending | GateDecision::Render => None,
        };
        if target == self.last {
            return None;
        }
        self.last = target;
        target
    }
}

/// Gate child content behind authentication and optional role authorization.
///
/// Renders a placeholder while the session resolves, nothing while a
/// redirect is in flight, and the children unchanged once authorized.
#[component]
pub fn Protected(#[prop(optional)] allowed_roles: Vec<String>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let roles = StoredValue::new(allowed_roles);
    let tracker = StoredValue::new(RedirectTracker::default());

    Effect::new(move || {
        let decision = roles.with_value(|allowed| decide(&session.get(), allowed));
        let mut target = None;
        tracker.update_value(|tracker| target = tracker.observe(decision));
        if let Some(path) = target {
            navigate(path, NavigateOptions::default());
        }
    });

    let decision = move || roles.with_value(|allowed| decide(&session.get(), allowed));
    view! {
        <Show
            when=move || matches!(decision(), GateDecision::Render)
            fallback=move || {
                view! {
                    <Show when=move || matches!(decision(), GateDecision::Pending)>
                        <Spinner size=SpinnerSize::Large caption="Checking your session..."/>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
