//! `newsroom-client`
//!
//! **Responsibility:** browser SPA for the newsroom content workflow.
//!
//! This crate provides:
//! - The session context backed by browser `localStorage`
//! - A thin HTTP client attaching the bearer token to every call
//! - The navigation shell, the access-gate component, and the four
//!   role-specific dashboards (Reader, Writer, Editor, Admin)
//!
//! The client is a **thin shell** around the newsroom API: it reflects
//! server decisions, it never makes them. DTO, error-mapping, and view-state
//! folding modules are target-independent so they stay testable on the host.

pub mod api;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod pages;
#[cfg(target_arch = "wasm32")]
pub mod session;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point; called automatically when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
