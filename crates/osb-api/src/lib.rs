//! Open Source Buddy chat API: library crate for the HTTP server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `osb-e2e-tests`) can reach `AppState`, `build_router` and the
//! session helpers.

pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod suggestions;
