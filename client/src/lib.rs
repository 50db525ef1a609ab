//! # client
//!
//! Leptos + WASM frontend for the content generation studio. One
//! functional screen collects a content brief, posts it to the generation
//! API, and renders/exports the structured result.
//!
//! This crate contains the app shell, pages, components, session state,
//! the generation API client, and the export pipeline. The wire schema
//! lives in the shared `content` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
