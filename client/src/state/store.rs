//! Session store: the single owner of authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one store, provides it through Leptos context, and mirrors
//! its session into an `RwSignal` via `subscribe`. Pages call `login`,
//! `signup` and `logout`; the route guard only reads the mirrored signal.
//!
//! CONCURRENCY
//! ===========
//! Checks and sign-in attempts carry separate sequence numbers. A check result
//! is applied only if no newer check started and no sign-in succeeded in the
//! meantime, so overlapping checks settle on the last one started and a
//! successful login always beats a check that was already in flight. A
//! sign-in result is applied only if no newer login, signup or logout
//! started. Failed sign-ins never touch either sequence, so a wrong password
//! typed during startup cannot discard the restored session. `logout` and
//! `teardown` bump both, turning any late resolution into a no-op.
//!
//! The mutex exists so the store is `Send + Sync` for context; listeners run
//! after the lock is released so they may read the store again.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::credentials::{ValidationError, validate_login, validate_signup};
use super::session::{Session, SessionStatus};
use crate::net::api::{AuthBackend, BackendError};
use crate::net::types::{SessionGrant, User};
use crate::util::token_storage::TokenStore;

/// Callback invoked with every new session value.
pub type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Why a `login` or `signup` did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid email or password.")]
    InvalidCredentials,
    /// Duplicate account or other refusal, with the service's message.
    #[error("{0}")]
    Rejected(String),
    #[error("Could not reach the sign-in service ({0}). Please try again.")]
    Transient(String),
    /// A newer operation started before this one resolved.
    #[error("This request was replaced by a newer one.")]
    Superseded,
    #[error("The session is no longer active.")]
    Closed,
}

impl From<BackendError> for AuthError {
    fn from(err: BackendError) -> Self {
        if err.is_transient() {
            return Self::Transient(err.to_string());
        }
        match err {
            BackendError::Unauthorized => Self::InvalidCredentials,
            BackendError::Conflict(message) | BackendError::Rejected { message, .. } => Self::Rejected(message),
            BackendError::Transport(detail) => Self::Transient(detail),
        }
    }
}

#[derive(Default)]
struct StoreState {
    session: Session,
    check_seq: u64,
    auth_seq: u64,
    closed: bool,
    next_listener: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl StoreState {
    fn listeners(&self) -> Vec<Listener> {
        self.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
    }

    /// Store `session` and return what to notify, or `None` when unchanged.
    fn replace(&mut self, session: Session) -> Option<(Session, Vec<Listener>)> {
        if session == self.session {
            return None;
        }
        self.session = session.clone();
        Some((session, self.listeners()))
    }
}

struct Inner {
    backend: Arc<dyn AuthBackend + Send + Sync>,
    tokens: Arc<dyn TokenStore + Send + Sync>,
    state: Mutex<StoreState>,
}

/// Shared handle to the session store. Clones refer to the same store.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("SessionStore")
            .field("session", &state.session)
            .field("check_seq", &state.check_seq)
            .field("auth_seq", &state.auth_seq)
            .field("closed", &state.closed)
            .field("listeners", &state.listeners.len())
            .finish_non_exhaustive()
    }
}

fn notify(listeners: &[Listener], session: &Session) {
    for listener in listeners {
        listener(session);
    }
}

fn publish(change: Option<(Session, Vec<Listener>)>) {
    if let Some((session, listeners)) = change {
        notify(&listeners, &session);
    }
}

impl SessionStore {
    /// Create a store in the `Unknown` state.
    #[must_use]
    pub fn new(backend: Arc<dyn AuthBackend + Send + Sync>, tokens: Arc<dyn TokenStore + Send + Sync>) -> Self {
        Self { inner: Arc::new(Inner { backend, tokens, state: Mutex::new(StoreState::default()) }) }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Register `listener` for every subsequent session change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) -> SubscriptionId {
        let mut state = self.lock();
        state.next_listener += 1;
        let id = SubscriptionId(state.next_listener);
        state.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().listeners.retain(|(existing, _)| *existing != id);
    }

    /// Run the bootstrap session check. Called once when the app mounts.
    pub async fn init(&self) -> Session {
        log::debug!("session store init");
        self.check_auth().await
    }

    /// Drop all listeners and invalidate in-flight operations.
    pub fn teardown(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.check_seq += 1;
        state.auth_seq += 1;
        state.listeners.clear();
        log::debug!("session store torn down");
    }

    /// Start a session check and publish `Checking`.
    /// Returns `None` once the store is closed.
    fn begin_check(&self) -> Option<u64> {
        let (seq, change) = {
            let mut state = self.lock();
            if state.closed {
                return None;
            }
            state.check_seq += 1;
            (state.check_seq, state.replace(Session::checking()))
        };
        publish(change);
        Some(seq)
    }

    fn is_current_check(&self, seq: u64) -> bool {
        let state = self.lock();
        !state.closed && state.check_seq == seq
    }

    /// Apply a check result if `seq` is still the newest check.
    fn commit_check(&self, seq: u64, session: Session) -> bool {
        let change = {
            let mut state = self.lock();
            if state.closed || state.check_seq != seq {
                return false;
            }
            state.replace(session)
        };
        publish(change);
        true
    }

    /// Start a login or signup. Returns `None` once the store is closed.
    fn begin_auth(&self) -> Option<u64> {
        let mut state = self.lock();
        if state.closed {
            return None;
        }
        state.auth_seq += 1;
        Some(state.auth_seq)
    }

    /// Apply a successful sign-in if `seq` is still the newest attempt.
    /// Any check still in flight is invalidated.
    fn commit_grant(&self, seq: u64, grant: &SessionGrant) -> bool {
        let change = {
            let mut state = self.lock();
            if state.closed || state.auth_seq != seq {
                return false;
            }
            state.check_seq += 1;
            state.replace(Session::authenticated(grant.user.clone()))
        };
        if let Err(err) = self.inner.tokens.save(&grant.token) {
            log::warn!("session token not persisted: {err}");
        }
        publish(change);
        true
    }

    fn stale_error(&self) -> AuthError {
        if self.is_closed() { AuthError::Closed } else { AuthError::Superseded }
    }

    /// Restore the session from the persisted token.
    ///
    /// Moves to `Checking` immediately and always settles on `Authenticated`
    /// or `Unauthenticated`; failures are logged, never returned. Returns the
    /// store's session after this call resolves.
    pub async fn check_auth(&self) -> Session {
        let Some(seq) = self.begin_check() else {
            return self.session();
        };
        let restored = self.restore(seq).await;
        if !self.commit_check(seq, restored) {
            log::debug!("session check {seq} superseded");
        }
        self.session()
    }

    async fn restore(&self, seq: u64) -> Session {
        let token = match self.inner.tokens.load() {
            Ok(Some(token)) => token,
            Ok(None) => return Session::unauthenticated(),
            Err(err) => {
                log::warn!("session token unreadable: {err}");
                return Session::unauthenticated();
            }
        };
        match self.inner.backend.verify(&token).await {
            Ok(user) => Session::authenticated(user),
            Err(err) if err.is_transient() => {
                log::warn!("session check failed, token kept for retry: {err}");
                Session::unauthenticated()
            }
            Err(err) => {
                log::info!("persisted session rejected: {err}");
                if self.is_current_check(seq) {
                    if let Err(err) = self.inner.tokens.clear() {
                        log::warn!("failed to clear rejected token: {err}");
                    }
                }
                Session::unauthenticated()
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] when a field is empty; the backend is not called.
    /// - [`AuthError::InvalidCredentials`], [`AuthError::Rejected`] or
    ///   [`AuthError::Transient`] when the backend refuses or is unreachable.
    /// - [`AuthError::Superseded`] / [`AuthError::Closed`] when a newer
    ///   operation or `teardown` overtook this call.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let credentials = validate_login(email, password)?;
        let seq = self.begin_auth().ok_or(AuthError::Closed)?;
        log::info!("login attempt {seq}");
        let result = self.inner.backend.authenticate(&credentials).await;
        self.finish_grant(seq, result)
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionStore::login`]; validation additionally
    /// rejects a confirmation that differs from the password.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, AuthError> {
        let request = validate_signup(name, email, password, confirm_password)?;
        let seq = self.begin_auth().ok_or(AuthError::Closed)?;
        log::info!("signup attempt {seq}");
        let result = self.inner.backend.register(&request).await;
        self.finish_grant(seq, result)
    }

    fn finish_grant(&self, seq: u64, result: Result<SessionGrant, BackendError>) -> Result<User, AuthError> {
        match result {
            Ok(grant) => {
                if !self.commit_grant(seq, &grant) {
                    log::debug!("auth attempt {seq} resolved after a newer operation; discarding grant");
                    return Err(self.stale_error());
                }
                Ok(grant.user)
            }
            Err(err) => {
                log::info!("auth attempt {seq} failed: {err}");
                // Only a store that never started a check is settled here; a
                // `Checking` session has a live check that will settle it.
                let change = {
                    let mut state = self.lock();
                    if state.closed || state.session.status() != SessionStatus::Unknown {
                        None
                    } else {
                        state.replace(Session::unauthenticated())
                    }
                };
                publish(change);
                Err(AuthError::from(err))
            }
        }
    }

    /// Sign out: clear the persisted token, publish `Unauthenticated`, then
    /// ask the backend to revoke the token. Revocation failures are logged.
    pub async fn logout(&self) {
        {
            let mut state = self.lock();
            if state.closed {
                return;
            }
            state.check_seq += 1;
            state.auth_seq += 1;
        }
        let token = self.inner.tokens.load().unwrap_or_else(|err| {
            log::warn!("session token unreadable during logout: {err}");
            None
        });
        if let Err(err) = self.inner.tokens.clear() {
            log::warn!("failed to clear session token: {err}");
        }
        let change = {
            let mut state = self.lock();
            if state.closed { None } else { state.replace(Session::unauthenticated()) }
        };
        publish(change);
        log::info!("logged out");

        if let Some(token) = token {
            if let Err(err) = self.inner.backend.revoke(&token).await {
                log::warn!("token revocation failed: {err}");
            }
        }
    }
}
