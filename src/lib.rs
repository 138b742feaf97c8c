//! # kyc-dashboard
//!
//! Leptos + WASM admin dashboard for the KYC document-extraction service.
//! Every screen is a thin presentation layer over the remote extraction API;
//! the piece with real behavior is the session lifecycle in [`auth`]: token
//! bootstrap on startup, login/logout, and the protected-navigation guard.
//!
//! Browser-only code (storage, HTTP, timers) lives behind the `hydrate`
//! feature with inert server-side stubs, so the state and decision logic in
//! `auth` and `net` stays testable with a plain `cargo test`.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
