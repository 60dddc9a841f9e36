//! # site
//!
//! Leptos + WASM frontend for the BIM consulting portfolio.
//!
//! This crate contains the static project catalog, pages, components, and the
//! per-component UI state (dropdown, carousel, flip). It is rendered on the
//! server with the `ssr` feature and hydrated in the browser with `hydrate`.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating {} categories", catalog::catalog().categories().len());
    leptos::mount::hydrate_body(app::App);
}
