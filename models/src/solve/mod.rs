//! The single JSON exchange with the solving service.
//!
//! `POST /api/solve` with [`SolveRequest`]; a success status carries a
//! [`SolveResponse`], any other status an [`ErrorResponse`]. Every response
//! field is optional on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body: `{"question": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub question: String,
}

impl SolveRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Body of a success response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub steps: Option<Vec<String>>,
    /// Server attestation that `solution` and `steps` are trusted math markup.
    #[serde(default)]
    pub markup: Option<bool>,
}

/// Body of a non-success response.
///
/// `detail` is kept as raw JSON: validation failures may send an array of
/// objects instead of a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// The server-supplied message, if `detail` is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(text)) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A solved question with missing fields defaulted to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveResult {
    pub solution: String,
    pub steps: Vec<String>,
    pub markup: Option<bool>,
}

impl From<SolveResponse> for SolveResult {
    fn from(response: SolveResponse) -> Self {
        Self {
            solution: response.solution.unwrap_or_default(),
            steps: response.steps.unwrap_or_default(),
            markup: response.markup,
        }
    }
}
