//! F1 Dashboard
//!
//! Formula 1 race results, telemetry, and predictions dashboard built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Race schedules and results for past seasons
//! - Per-driver telemetry charts (speed over lap distance)
//! - Driver and constructor championship standings
//! - ML-powered qualifying/race predictions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the F1 Dashboard API over HTTP; the
//! backend is an external service expected at a fixed base URL.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod types;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
