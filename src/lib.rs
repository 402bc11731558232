//! # expense-ui
//!
//! Leptos + WASM frontend for the personal expense tracker.
//!
//! This crate contains pages, components, application state, wire types,
//! and the REST endpoint helpers. All business logic here is presentation
//! logic: form validation, list pagination and filters, date and currency
//! formatting, and dashboard aggregation over already-fetched expenses.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and logger, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = config::ClientConfig::get().log_level;
    let _ = console_log::init_with_level(level.into());
    log::info!("expense-ui starting; api={}", config::ClientConfig::get().api_base_url);
    leptos::mount::hydrate_body(app::App);
}
