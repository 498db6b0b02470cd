//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the value every view reads, `store` is the only thing that
//! produces new values, and `credentials` holds the input rules both the
//! pages and the store enforce.

pub mod credentials;
pub mod session;
pub mod store;
