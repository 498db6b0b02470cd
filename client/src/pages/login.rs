//! Login page: email + password form backed by the session store.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::auth_form::{SubmitOutcome, SubmitStep, submit_outcome, submit_step};
use crate::state::credentials::validate_login;
use crate::state::store::SessionStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        match submit_step(busy.get_untracked(), &validate_login(&email_value, &password_value)) {
            SubmitStep::Ignore => return,
            SubmitStep::Reject(message) => {
                error.set(Some(message));
                return;
            }
            SubmitStep::Send => {}
        }
        busy.set(true);
        error.set(None);

        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = store.login(&email_value, &password_value).await;
            match submit_outcome(&result) {
                SubmitOutcome::Navigate(path) => navigate(path, NavigateOptions::default()),
                SubmitOutcome::Stay(message) => {
                    // The page may have unmounted while the request was in flight.
                    let _ = error.try_set(Some(message));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="your@email.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="••••••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href="/signup">"Sign up here"</A>
                </p>
            </div>
        </div>
    }
}
