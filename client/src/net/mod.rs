//! Network boundary — DTOs for the identity provider's REST surface.

pub mod types;
