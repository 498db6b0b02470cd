//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::net::api::HttpAuthBackend;
use crate::pages::{dashboard::DashboardPage, landing::LandingPage, login::LoginPage, signup::SignupPage};
use crate::state::session::Session;
use crate::state::store::SessionStore;
use crate::util::auth::{GuestOnly, SessionGate};
use crate::util::token_storage::default_token_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store for the lifetime of the app: provides it and a
/// mirrored `RwSignal<Session>` as context, runs the bootstrap check once in
/// the browser, and tears the store down on cleanup.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(Arc::new(HttpAuthBackend::default()), default_token_store());
    let session = RwSignal::new(store.session());
    store.subscribe(move |next| session.set(next.clone()));

    provide_context(store.clone());
    provide_context(session);

    // Effects only run in the browser, so SSR always renders the pending state.
    let bootstrap = store.clone();
    Effect::new(move |_| {
        let store = bootstrap.clone();
        leptos::task::spawn_local(async move {
            store.init().await;
        });
    });

    on_cleanup(move || store.teardown());

    view! {
        <Stylesheet id="leptos" href="/pkg/mealfinder.css"/>
        <Title text="Smart Meal Finder"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <GuestOnly><LoginPage/></GuestOnly> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <GuestOnly><SignupPage/></GuestOnly> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <SessionGate><DashboardPage/></SessionGate> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
