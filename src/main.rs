//! DormSpace
//!
//! Roommate coordination dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Account signup, login and email verification
//! - Household groups with invite links
//! - One-off and recurring chores with schedule descriptions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives behind the DormSpace API, reached over HTTP
//! with cookie-based sessions.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod recurrence;
mod state;
mod validate;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route tracing output to the browser console
    tracing_wasm::set_as_global_default();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
