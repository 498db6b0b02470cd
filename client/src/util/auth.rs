//! Route guard for session-protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes wrap their page in [`SessionGate`] so every one of them
//! applies identical pending/redirect behavior. The guard keeps no state of
//! its own; it re-evaluates [`GuardState::from_session`] whenever the
//! session signal changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::{Session, SessionStatus};

/// Unauthenticated entry point.
pub const LOGIN_PATH: &str = "/login";

/// Where successful login/signup lands.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of evaluating the guard against a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session bootstrap still running: show a placeholder, do not redirect.
    Pending,
    /// Render the protected view.
    Allowed,
    /// Redirect to [`LOGIN_PATH`] without rendering the view.
    Denied,
}

impl GuardState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        match session.status() {
            SessionStatus::Unknown | SessionStatus::Checking => Self::Pending,
            SessionStatus::Authenticated => Self::Allowed,
            SessionStatus::Unauthenticated => Self::Denied,
        }
    }
}

/// Render `children` only while the session is authenticated.
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let state = Memo::new(move |_| GuardState::from_session(&session.get()));

    move || match state.get() {
        GuardState::Pending => view! {
            <div class="route-guard route-guard--pending" aria-busy="true">
                <p>"Checking your session..."</p>
            </div>
        }
        .into_any(),
        GuardState::Allowed => children().into_any(),
        GuardState::Denied => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
    }
}

/// Send an already-authenticated visitor away from the login/signup forms.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let authenticated = Memo::new(move |_| session.get().is_authenticated());

    move || {
        if authenticated.get() {
            view! { <Redirect path=DASHBOARD_PATH/> }.into_any()
        } else {
            children().into_any()
        }
    }
}
