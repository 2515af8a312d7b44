//! Domain models for the Calculus Assistant.
//!
//! This crate contains pure data structures: the JSON exchanged with the
//! solving service, the UI state of a solver session, and the typesetting
//! configuration. Models have no business logic; `client-core` operates on
//! them and the terminal app wires everything together.

pub mod error;
pub mod render;
pub mod solve;
pub mod typeset_config;
pub mod ui_state;

pub use error::model_error::ModelError;
pub use render::{RenderBlock, RenderMode};
pub use solve::{ErrorResponse, SolveRequest, SolveResponse, SolveResult};
pub use typeset_config::{DelimiterPair, TypesetConfig, TypesetConfigBuilder};
pub use ui_state::UiState;

#[cfg(test)]
mod tests;
