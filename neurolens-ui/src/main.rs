//! NeuroLens Site
//!
//! Marketing site and demo console built with Leptos (WASM).
//!
//! # Pages
//!
//! - `/` - Landing page
//! - `/dashboard` - Text-preview simulator demo
//! - `/developer` - Developer portal demo
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly and
//! served as static files by the `neurolens` site host. The simulator, page
//! content and route table come from the shared `neurolens` crate; nothing
//! here talks to a backend.

use leptos::*;

mod app;
mod components;
mod pages;
mod random;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
