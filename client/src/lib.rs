//! # sebat-client
//!
//! Leptos + WASM frontend for the Sebat Group marketing site.
//!
//! This crate contains pages, components, the static site content, the UI
//! controllers (carousel timer, reveal latch, navigation menu, contact form),
//! and the REST helper used to submit the contact form. The server crate
//! renders it with `ssr`; the browser bundle hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
