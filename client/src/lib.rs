//! # client
//!
//! Leptos + WASM frontend for InternshipRoute.
//!
//! The session rules (token and profile storage, the API client and the
//! route gate) live in the `session` crate. This crate binds them to the
//! browser: `localStorage`, `fetch` through gloo-net, and the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
