//! Networking modules for the authentication service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `AuthBackend` collaborator and its HTTP implementation,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod types;
