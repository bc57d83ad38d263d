//! API Access Layer
//!
//! Typed HTTP client for the F1 Dashboard REST API.

pub mod client;

pub use client::*;
