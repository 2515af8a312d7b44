use crate::{CONNECT_FAILURE_MESSAGE, SERVER_FAILURE_MESSAGE};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SolverClientError {
    /// No response was obtained (refused, DNS, timeout, broken body).
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    /// A response arrived but its body was not the expected JSON.
    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The service answered with a non-success status.
    #[error("Server Error: HTTP {status} - {} {location}", .detail.as_deref().unwrap_or("<no detail>"))]
    Server {
        status: HttpStatusCode,
        detail: Option<String>,
        location: ErrorLocation,
    },
}

impl SolverClientError {
    /// The message a user sees for this failure.
    ///
    /// Only server-reported failures carry their own text; everything else
    /// collapses to the connectivity message.
    pub fn user_message(&self) -> &str {
        match self {
            SolverClientError::Server {
                detail: Some(detail),
                ..
            } => detail,
            SolverClientError::Server { detail: None, .. } => SERVER_FAILURE_MESSAGE,
            SolverClientError::Transport { .. }
            | SolverClientError::Json { .. }
            | SolverClientError::UrlParse { .. } => CONNECT_FAILURE_MESSAGE,
        }
    }

    pub fn is_server_reported(&self) -> bool {
        matches!(self, SolverClientError::Server { .. })
    }
}

impl From<url::ParseError> for SolverClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        SolverClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SolverClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        SolverClientError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SolverClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        SolverClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
