//! # maktab_core
//!
//! Core domain logic for the Maktab admin console: session storage, token
//! claims inspection, the HTTP gateway, and the auth service that ties them
//! together.

pub mod api;
pub mod auth;
pub mod config;
pub mod menu;
pub mod models;
pub mod roster;
pub mod routes;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
