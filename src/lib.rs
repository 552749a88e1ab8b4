//! Lingua - language learning marketing site
//!
//! Server-rendered landing page built with Leptos, with a newsletter
//! capture modal that is offered at most once per browser profile.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
