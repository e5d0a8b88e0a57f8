//! # client
//!
//! Leptos + WASM admin console for the school bus tracking system.
//!
//! Staff sign in, then manage buses, students, and notifications through
//! forms backed by the external REST API. Pure logic (session, route guard,
//! panel state, request building, wire types) compiles natively and is unit
//! tested without the `csr` feature; the browser build mounts [`app::App`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
