//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Only `SessionStore` builds new
//! values; everyone else holds snapshots.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nothing has been checked yet.
    #[default]
    Unknown,
    /// A persisted token is being verified.
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Authentication state: status plus the user when authenticated.
///
/// Fields are private so a user is present exactly when the status is
/// `Authenticated`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    status: SessionStatus,
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn checking() -> Self {
        Self { status: SessionStatus::Checking, user: None }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { status: SessionStatus::Authenticated, user: Some(user) }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { status: SessionStatus::Unauthenticated, user: None }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// True until the first check or login has resolved.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.status, SessionStatus::Unknown | SessionStatus::Checking)
    }
}
