//! DIWAY Web Frontend
//!
//! Leptos-based WASM frontend for the interactive pitch deck.

mod app;
mod components;
mod pages;
mod storage;

pub use app::App;
pub use storage::LocalStorageStore;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
