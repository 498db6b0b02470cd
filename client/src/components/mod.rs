//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Site chrome shared by every route. Components read the session from Leptos
//! context and never mutate it except through `SessionStore::logout`.

pub mod footer;
pub mod navbar;
