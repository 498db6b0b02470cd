//! # client
//!
//! Leptos + WASM front-end for Smart Meal Finder: marketing landing page,
//! login and signup forms, and a session-gated dashboard.
//!
//! The crate is compiled twice: with `ssr` for server-side rendering inside
//! the host binary, and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
