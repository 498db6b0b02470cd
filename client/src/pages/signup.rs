//! Signup page: account form with password confirmation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::auth_form::{SubmitOutcome, SubmitStep, submit_outcome, submit_step};
use crate::state::credentials::validate_signup;
use crate::state::store::SessionStore;

/// Labelled text input bound to `value`.
#[component]
fn FormField(
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="auth-form__label">
            {label}
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = (
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
            confirm_password.get_untracked(),
        );
        match submit_step(busy.get_untracked(), &validate_signup(&fields.0, &fields.1, &fields.2, &fields.3)) {
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
            let (name, email, password, confirm) = fields;
            let result = store.signup(&name, &email, &password, &confirm).await;
            match submit_outcome(&result) {
                SubmitOutcome::Navigate(path) => navigate(path, NavigateOptions::default()),
                SubmitOutcome::Stay(message) => {
                    let _ = error.try_set(Some(message));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormField label="Full Name" kind="text" placeholder="Your name" value=name/>
                    <FormField label="Email" kind="email" placeholder="your@email.com" value=email/>
                    <FormField label="Password" kind="password" placeholder="••••••••" value=password/>
                    <FormField label="Confirm Password" kind="password" placeholder="••••••••" value=confirm_password/>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Login here"</A>
                </p>
            </div>
        </div>
    }
}
