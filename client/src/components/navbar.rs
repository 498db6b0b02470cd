//! Top navigation bar with session-aware actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::Session;
use crate::state::store::SessionStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<Session>>();
    let authenticated = Memo::new(move |_| session.get().is_authenticated());

    let on_logout = Callback::new(move |()| {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            store.logout().await;
        });
    });

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Smart Meal Finder"</A>
            <div class="navbar__actions">
                <Show
                    when=move || authenticated.get()
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="navbar__link">"Login"</A>
                            <A href="/signup" attr:class="btn btn--primary">"Sign Up"</A>
                        }
                    }
                >
                    <A href="/dashboard" attr:class="navbar__link">"Dashboard"</A>
                    <button class="btn" on:click=move |_| on_logout.run(())>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}
