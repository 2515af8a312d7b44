use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SessionError {
    /// The UI state actor is gone or dropped an acknowledgement.
    #[error("State Actor Error: {message} {location}")]
    StateActor {
        message: String,
        location: ErrorLocation,
    },
}
