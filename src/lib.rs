//! # portal-client
//!
//! Leptos + WASM frontend shell for the FIDO demo portal.
//!
//! The interesting piece is [`guard::AuthGuard`]: before a protected route
//! renders, it asks the auth backend whether the browser session is logged
//! in, records the username as the session marker, and hard-redirects to the
//! external login page otherwise. Everything else here is the browser glue
//! the guard is wired to.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
