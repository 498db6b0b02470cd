use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::api::{AuthBackend, BackendError};
use crate::net::types::{LoginCredentials, SessionGrant, SignupRequest, User};
use crate::state::credentials::{validate_login, validate_signup};
use crate::state::store::SessionStore;
use crate::util::token_storage::MemoryTokenStore;

// =============================================================
// Helpers
// =============================================================

/// Backend answering every sign-in with one scripted result.
struct ScriptedBackend {
    grant: Mutex<Option<Result<SessionGrant, BackendError>>>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    fn new(grant: Result<SessionGrant, BackendError>) -> Arc<Self> {
        Arc::new(Self { grant: Mutex::new(Some(grant)), calls: AtomicUsize::new(0) })
    }

    fn next(&self) -> Result<SessionGrant, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.grant
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(BackendError::Transport("unscripted".to_owned())))
    }
}

#[async_trait(?Send)]
impl AuthBackend for ScriptedBackend {
    async fn verify(&self, _token: &str) -> Result<User, BackendError> {
        Err(BackendError::Unauthorized)
    }

    async fn authenticate(&self, _credentials: &LoginCredentials) -> Result<SessionGrant, BackendError> {
        self.next()
    }

    async fn register(&self, _request: &SignupRequest) -> Result<SessionGrant, BackendError> {
        self.next()
    }

    async fn revoke(&self, _token: &str) -> Result<(), BackendError> {
        Ok(())
    }
}

fn alice() -> User {
    User { id: "u-1".to_owned(), name: "Alice".to_owned(), email: "a@b.com".to_owned() }
}

fn store_with(backend: &Arc<ScriptedBackend>) -> SessionStore {
    SessionStore::new(backend.clone(), Arc::new(MemoryTokenStore::new()))
}

/// Where the form ends up after one submit.
#[derive(Debug, PartialEq, Eq)]
enum FormResult {
    Ignored,
    Shown(String),
    Went(&'static str),
}

/// Same sequence the login page runs on submit.
fn submit_login(store: &SessionStore, busy: bool, email: &str, password: &str) -> FormResult {
    match submit_step(busy, &validate_login(email, password)) {
        SubmitStep::Ignore => FormResult::Ignored,
        SubmitStep::Reject(message) => FormResult::Shown(message),
        SubmitStep::Send => match submit_outcome(&block_on(store.login(email, password))) {
            SubmitOutcome::Navigate(path) => FormResult::Went(path),
            SubmitOutcome::Stay(message) => FormResult::Shown(message),
        },
    }
}

/// Same sequence the signup page runs on submit.
fn submit_signup(store: &SessionStore, fields: [&str; 4]) -> FormResult {
    let [name, email, password, confirm] = fields;
    match submit_step(false, &validate_signup(name, email, password, confirm)) {
        SubmitStep::Ignore => FormResult::Ignored,
        SubmitStep::Reject(message) => FormResult::Shown(message),
        SubmitStep::Send => match submit_outcome(&block_on(store.signup(name, email, password, confirm))) {
            SubmitOutcome::Navigate(path) => FormResult::Went(path),
            SubmitOutcome::Stay(message) => FormResult::Shown(message),
        },
    }
}

// =============================================================
// submit_step / submit_outcome
// =============================================================

#[test]
fn busy_form_ignores_submit_before_validating() {
    let invalid: Result<(), ValidationError> = Err(ValidationError::PasswordMismatch);
    assert_eq!(submit_step(true, &invalid), SubmitStep::Ignore);
    assert_eq!(submit_step(true, &Ok::<(), ValidationError>(())), SubmitStep::Ignore);
}

#[test]
fn invalid_input_is_rejected_with_message() {
    let invalid: Result<(), ValidationError> = Err(ValidationError::PasswordMismatch);
    assert_eq!(submit_step(false, &invalid), SubmitStep::Reject("Passwords do not match.".to_owned()));
}

#[test]
fn success_navigates_to_dashboard() {
    let result: Result<(), AuthError> = Ok(());
    assert_eq!(submit_outcome(&result), SubmitOutcome::Navigate("/dashboard"));
}

#[test]
fn superseded_attempt_does_not_navigate() {
    let result: Result<(), AuthError> = Err(AuthError::Superseded);
    assert!(matches!(submit_outcome(&result), SubmitOutcome::Stay(_)));
}

// =============================================================
// Login form
// =============================================================

#[test]
fn login_with_empty_password_stays_without_calling_backend() {
    let backend = ScriptedBackend::new(Ok(grant_for_alice()));
    let store = store_with(&backend);

    let result = submit_login(&store, false, "a@b.com", "");

    assert_eq!(result, FormResult::Shown("Password is required.".to_owned()));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    assert!(!store.session().is_authenticated());
}

#[test]
fn login_with_wrong_password_stays_with_feedback() {
    let backend = ScriptedBackend::new(Err(BackendError::Unauthorized));
    let store = store_with(&backend);

    let result = submit_login(&store, false, "a@b.com", "typo");

    assert_eq!(result, FormResult::Shown("Invalid email or password.".to_owned()));
    assert!(!store.session().is_authenticated());
}

#[test]
fn login_success_goes_to_dashboard() {
    let backend = ScriptedBackend::new(Ok(grant_for_alice()));
    let store = store_with(&backend);

    assert_eq!(submit_login(&store, false, "a@b.com", "pw"), FormResult::Went("/dashboard"));
    assert!(store.session().is_authenticated());
}

#[test]
fn login_while_busy_sends_nothing() {
    let backend = ScriptedBackend::new(Ok(grant_for_alice()));
    let store = store_with(&backend);

    assert_eq!(submit_login(&store, true, "a@b.com", "pw"), FormResult::Ignored);
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

// =============================================================
// Signup form
// =============================================================

#[test]
fn signup_with_mismatched_passwords_stays_on_form() {
    let backend = ScriptedBackend::new(Ok(grant_for_alice()));
    let store = store_with(&backend);

    let result = submit_signup(&store, ["Alice", "a@b.com", "pw", "pw2"]);

    assert_eq!(result, FormResult::Shown("Passwords do not match.".to_owned()));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn signup_for_existing_account_stays_with_service_message() {
    let backend = ScriptedBackend::new(Err(BackendError::Conflict("email already registered".to_owned())));
    let store = store_with(&backend);

    let result = submit_signup(&store, ["Alice", "a@b.com", "pw", "pw"]);

    assert_eq!(result, FormResult::Shown("email already registered".to_owned()));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    assert!(!store.session().is_authenticated());
}

#[test]
fn signup_success_goes_to_dashboard() {
    let backend = ScriptedBackend::new(Ok(grant_for_alice()));
    let store = store_with(&backend);

    assert_eq!(submit_signup(&store, ["Alice", "a@b.com", "pw", "pw"]), FormResult::Went("/dashboard"));
    assert_eq!(store.session().user(), Some(&alice()));
}

fn grant_for_alice() -> SessionGrant {
    SessionGrant { token: "tok-1".to_owned(), user: alice() }
}
