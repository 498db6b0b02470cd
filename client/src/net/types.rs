//! Wire DTOs for the authentication service boundary.
//!
//! DESIGN
//! ======
//! Credential types exist only for the duration of a submit call. Their
//! `Debug` impls redact passwords so they can flow through `log` macros and
//! test assertions without leaking secrets.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the authentication service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier assigned by the service.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
}

/// Email + password pair submitted by the login form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account fields submitted by the signup form.
///
/// The confirmation field is checked locally and never sent over the wire.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `login` / `signup` response: a fresh session token and the
/// user it belongs to.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SessionGrant {
    /// Opaque session token; format is owned by the authentication service.
    pub token: String,
    pub user: User,
}

impl fmt::Debug for SessionGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGrant")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Error body returned by the authentication service on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
