//! # client
//!
//! Leptos + WASM frontend for the Delta Run Muscle influencer portal.
//!
//! This crate contains pages, components, application state, REST helpers,
//! and the browser-side theme plumbing. The server crate renders it with the
//! `ssr` feature; the WASM bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
