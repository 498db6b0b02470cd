//! Dashboard page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only mounted behind `SessionGate`, so the session is authenticated while
//! this renders. Logging out flips the session and the gate sends the user
//! back to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::Session;
use crate::state::store::SessionStore;

/// Greeting line for the dashboard header.
pub(crate) fn greeting(user: Option<&User>) -> String {
    match user.map(|u| u.name.trim()).filter(|name| !name.is_empty()) {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<Session>>();

    let on_logout = move |_| {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            store.logout().await;
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || greeting(session.get().user())}</h1>
                <p class="dashboard-page__email">
                    {move || session.get().user().map(|u| u.email.clone()).unwrap_or_default()}
                </p>
                <button class="btn" on:click=on_logout>"Logout"</button>
            </header>
            <section class="dashboard-page__cards">
                <article class="dashboard-card">
                    <h2>"AI Meal Query"</h2>
                    <p>"Ask about ingredients, calories, and cooking methods. Coming soon."</p>
                </article>
                <article class="dashboard-card">
                    <h2>"Saved Meals"</h2>
                    <p>"Your personal recipe collection will appear here."</p>
                </article>
            </section>
        </div>
    }
}
