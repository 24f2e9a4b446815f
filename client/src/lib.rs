//! # client
//!
//! Leptos + WASM frontend for the dashboard. Every dashboard page renders
//! inside `DashboardShell`, which scopes the signed-in user, pins the sidebar
//! to the left edge and offsets page content beside it.
//!
//! The `server` crate renders this app over SSR; the `hydrate` feature builds
//! the browser bundle that takes over the server-rendered markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating dashboard");
    leptos::mount::hydrate_body(app::App);
}
