use common::ErrorLocation;

use std::panic::Location;

use models::ModelError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TypesetError {
    #[error("Typesetter Not Configured Error: {location}")]
    NotConfigured { location: ErrorLocation },

    #[error("Typesetter Torn Down Error: {location}")]
    TornDown { location: ErrorLocation },

    #[error("Typeset Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ModelError> for TypesetError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        TypesetError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
