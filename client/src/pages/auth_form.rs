//! Submit handling shared by the login and signup pages.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::state::credentials::ValidationError;
use crate::state::store::AuthError;
use crate::util::auth::DASHBOARD_PATH;

/// What a form does when its submit button fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SubmitStep {
    /// A request is already in flight; drop the click.
    Ignore,
    /// Local validation failed; show `message` without calling the store.
    Reject(String),
    /// Mark the form busy and call the store.
    Send,
}

/// Decide whether a submit reaches the store.
pub(crate) fn submit_step<V>(busy: bool, validated: &Result<V, ValidationError>) -> SubmitStep {
    if busy {
        return SubmitStep::Ignore;
    }
    match validated {
        Ok(_) => SubmitStep::Send,
        Err(err) => SubmitStep::Reject(err.to_string()),
    }
}

/// What a form does once its store call resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    /// Leave the form for `path`.
    Navigate(&'static str),
    /// Stay on the form and show `message`.
    Stay(String),
}

/// Navigate to the dashboard only when the store reports success.
pub(crate) fn submit_outcome<T>(result: &Result<T, AuthError>) -> SubmitOutcome {
    match result {
        Ok(_) => SubmitOutcome::Navigate(DASHBOARD_PATH),
        Err(err) => SubmitOutcome::Stay(err.to_string()),
    }
}
