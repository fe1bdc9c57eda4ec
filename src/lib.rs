//! # triage-client
//!
//! Leptos + WASM frontend for the JAGAT-X radiology triage tool.
//!
//! Authentication and AI inference are owned by an external HTTP backend.
//! This crate holds the session lifecycle (recovery, login, logout), the
//! role-based route guard, the backend wire schema, and the route-level
//! pages that sit on top of them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
