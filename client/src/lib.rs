//! # client
//!
//! Leptos + WASM front end for the Showcase Admin console: the operator UI
//! for curating paired before/after media examples and categorized audio
//! samples shown on the public marketing site.
//!
//! All durable state lives behind the external showcase backend API; this
//! crate holds pages, components, reactive state, the REST client, and the
//! pairing/numbering reconciliation logic.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
