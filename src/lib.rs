//! # chat-widget
//!
//! Leptos + WASM chat assistant widget for the textbook site.
//!
//! The widget is a floating overlay panel that posts a reader's question to
//! a single answer endpoint and appends the reply to an in-memory
//! transcript. The host layout mounts it once per page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds the pure widget state machine, `controller` applies the
//! widget operations to a live store, `net` owns the one outbound call, and
//! `components` renders everything with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
