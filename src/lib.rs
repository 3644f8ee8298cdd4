//! # admin-console
//!
//! Leptos + WASM single-page admin client for user management.
//!
//! This crate contains pages, components, application state, the route
//! guard, the bearer-token HTTP layer, and the tabular export service
//! (.csv / .xlsx / .pdf). There is no backend logic here; every mutation
//! goes through the admin HTTP API.

pub mod app;
pub mod components;
pub mod export;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Called from the generated JS shim once the WASM
/// module is loaded.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
