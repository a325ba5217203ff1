//! Shared client state provided via Leptos context.
//!
//! DESIGN
//! ======
//! Each store is a plain struct held in an `RwSignal` context with a
//! single logical writer: provider events for the session, user actions
//! for theme and cart. Keeping the structs pure keeps every transition
//! unit-testable without a reactive runtime.

pub mod cart;
pub mod session;
pub mod theme;
