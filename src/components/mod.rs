//! Reusable UI building blocks.

pub mod require_login;
