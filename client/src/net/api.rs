//! Authentication service client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `BackendError::Transport` since the
//! session token only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status codes are folded into `BackendError` so the session store can tell
//! a definitive rejection (clear the token) from a transient failure (keep it
//! and let the user retry).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginCredentials, SessionGrant, SignupRequest, User};

/// Base path of the authentication service when `MEAL_FINDER_AUTH_BASE` is
/// unset at build time.
pub const DEFAULT_AUTH_BASE: &str = "/api/auth";

/// Auth service base path baked in at compile time.
#[must_use]
pub fn auth_base() -> &'static str {
    option_env!("MEAL_FINDER_AUTH_BASE").unwrap_or(DEFAULT_AUTH_BASE)
}

/// Failure reported by an [`AuthBackend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The token or credentials were rejected (401/403).
    #[error("unauthorized")]
    Unauthorized,
    /// The account already exists (409).
    #[error("{0}")]
    Conflict(String),
    /// Any other non-2xx response.
    #[error("{message} ({status})")]
    Rejected { status: u16, message: String },
    /// Network, decode, or environment failure. Retryable.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl BackendError {
    /// Classify a non-2xx HTTP status with the service's optional message.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            409 => Self::Conflict(message.unwrap_or_else(|| "An account with this email already exists.".to_owned())),
            _ => Self::Rejected { status, message: message.unwrap_or_else(|| format!("request failed: {status}")) },
        }
    }

    /// Whether retrying the same call might succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::Unauthorized | Self::Conflict(_) => false,
        }
    }
}

/// The external authentication collaborator.
///
/// The store only depends on this trait; the HTTP client below is the
/// production implementation and tests supply scripted mocks.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Resolve a persisted token to its user.
    async fn verify(&self, token: &str) -> Result<User, BackendError>;

    /// Exchange login credentials for a session.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionGrant, BackendError>;

    /// Create an account and open a session for it.
    async fn register(&self, request: &SignupRequest) -> Result<SessionGrant, BackendError>;

    /// Invalidate a token server-side.
    async fn revoke(&self, token: &str) -> Result<(), BackendError>;
}

/// JSON-over-HTTP [`AuthBackend`] rooted at a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAuthBackend {
    base: String,
}

impl HttpAuthBackend {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }
}

impl Default for HttpAuthBackend {
    fn default() -> Self {
        Self::new(auth_base())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> BackendError {
    BackendError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, BackendError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<super::types::ErrorBody>().await.unwrap_or_default();
        return Err(BackendError::from_status(status, body.message));
    }
    resp.json::<T>().await.map_err(transport)
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn verify(&self, token: &str) -> Result<User, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint("me"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint("me"), token);
            Err(unavailable())
        }
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionGrant, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("login"))
                .json(credentials)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    async fn register(&self, request: &SignupRequest) -> Result<SessionGrant, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("signup"))
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(unavailable())
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("logout"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(BackendError::from_status(resp.status(), None));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(unavailable())
        }
    }
}
