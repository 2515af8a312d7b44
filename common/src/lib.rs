//! Shared building blocks for the Calculus Assistant workspace.
//!
//! Everything here is small and dependency-light:
//! `models`, `client-core` and the terminal app all depend on it.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, HTTP status helpers
//! - **models**: Pure data structures exchanged with the solving service
//! - **client-core**: Business logic operating on models
//! - **calculus-assistant**: Terminal application wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
