//! # jobtrack-client
//!
//! Leptos + WASM browser front-end for the job tracker.
//!
//! Pages call the shared `jobtrack-core` services through a dispatcher backed
//! by `window.localStorage` and `gloo-net`. Route protection is the core
//! `RouteGuard`, evaluated by the [`components::protected::Protected`]
//! wrapper before any protected page mounts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod storage;

/// WASM entry point: install console logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
