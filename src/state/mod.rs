//! Shared client-side state.
//!
//! Provided as `RwSignal` contexts from [`crate::app::App`].

pub mod session;
