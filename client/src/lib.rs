//! # client
//!
//! Leptos front-end for the TLDR News site: marketing pages, authentication,
//! the account dashboard, and Paddle checkout.
//!
//! Flows in `flows` hold the decisions and run natively against the
//! `Transport` and `KeyValueStore` seams; `pages` wire them to signals and the
//! browser. Built with `hydrate` for the WASM bundle and `ssr` for the server.

pub mod app;
pub mod components;
pub mod config;
pub mod flows;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
