//! DTOs for the identity provider's REST surface.
//!
//! DESIGN
//! ======
//! These types mirror the provider's user payloads so serde round-trips
//! stay lossless. The provider owns the identity; the session store holds
//! a read-only cached copy of this struct.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the provider's user endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier (provider-issued UUID string).
    pub id: String,
    /// Primary email address, if the provider shares one.
    pub email: Option<String>,
    /// Application role (e.g. `"customer"`, `"admin"`).
    #[serde(default = "default_role")]
    pub role: String,
    /// Display name from provider metadata, if set.
    pub display_name: Option<String>,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
}

fn default_role() -> String {
    "customer".to_owned()
}

impl Identity {
    /// Best available label for UI display: display name, then email,
    /// then the raw identifier.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if let Some(name) = self.display_name.as_deref() {
            if !name.is_empty() {
                return name;
            }
        }
        if let Some(email) = self.email.as_deref() {
            if !email.is_empty() {
                return email;
            }
        }
        &self.id
    }
}
