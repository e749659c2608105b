//! # physgpt-client
//!
//! Leptos + WASM frontend for the PhysGPT application: registration, login,
//! email confirmation, password reset/change, and a login-gated chat screen.
//!
//! The crate is organized around a small session/authorization core:
//! `util::credentials` persists identity fields across reloads,
//! `state::auth` exposes the in-memory session snapshot via context, and the
//! `components::protected_route` / `components::protected_element` gates
//! decide what renders. Pages perform the backend exchanges in `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
