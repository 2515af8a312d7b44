use client_core::error::CoreError;
use client_core::error::config::ConfigError;
use client_core::error::session::SessionError;
use client_core::error::solver_client::SolverClientError;
use client_core::error::typeset::TypesetError;

use common::ErrorLocation;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors that can stop the assistant.
///
/// Solve failures are not errors at this level: they are shown in the error
/// region. These cover startup, the state store and terminal I/O.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum AssistantError {
    /// Error from this App
    #[error("Assistant Error: {message} {location}")]
    Assistant {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (config, session, typesetting)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Reading the question or writing the view failed
    #[error("Terminal Error: {message} {location}")]
    Terminal {
        message: String,
        location: ErrorLocation,
    },
}

impl AssistantError {
    #[track_caller]
    fn core(error: CoreError) -> Self {
        AssistantError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for AssistantError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        Self::core(error.into())
    }
}

impl From<SessionError> for AssistantError {
    #[track_caller]
    fn from(error: SessionError) -> Self {
        Self::core(error.into())
    }
}

impl From<SolverClientError> for AssistantError {
    #[track_caller]
    fn from(error: SolverClientError) -> Self {
        Self::core(error.into())
    }
}

impl From<TypesetError> for AssistantError {
    #[track_caller]
    fn from(error: TypesetError) -> Self {
        Self::core(error.into())
    }
}
