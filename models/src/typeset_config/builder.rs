use crate::error::model_error::ModelError;
use crate::typeset_config::{DelimiterPair, TypesetConfig};

use common::ErrorLocation;

use std::panic::Location;

/// Builder for creating validated [`TypesetConfig`] instances.
///
/// Starts empty: unlike `TypesetConfig::default()`, no delimiters are
/// registered until added.
#[derive(Debug, Default)]
pub struct TypesetConfigBuilder {
    inline_math: Vec<DelimiterPair>,
    display_math: Vec<DelimiterPair>,
    process_escapes: Option<bool>,
    show_messages: Option<bool>,
}

impl TypesetConfigBuilder {
    pub fn with_inline(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.inline_math.push(DelimiterPair::new(open, close));
        self
    }

    pub fn with_display(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.display_math.push(DelimiterPair::new(open, close));
        self
    }

    pub fn with_process_escapes(mut self, process_escapes: bool) -> Self {
        self.process_escapes = Some(process_escapes);
        self
    }

    pub fn with_show_messages(mut self, show_messages: bool) -> Self {
        self.show_messages = Some(show_messages);
        self
    }

    /// Build the config with validation.
    ///
    /// Escapes default to enabled and messages to suppressed.
    #[track_caller]
    pub fn build(self) -> Result<TypesetConfig, ModelError> {
        if self.inline_math.is_empty() && self.display_math.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("At least one math delimiter pair is required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let all_pairs = self.inline_math.iter().chain(self.display_math.iter());
        for pair in all_pairs.clone() {
            if pair.open.is_empty() || pair.close.is_empty() {
                return Err(ModelError::Validation {
                    message: String::from("Math delimiters cannot be empty"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let opens: Vec<&str> = all_pairs.map(|pair| pair.open.as_str()).collect();
        for (index, open) in opens.iter().enumerate() {
            if opens[index + 1..].contains(open) {
                return Err(ModelError::Validation {
                    message: format!("Duplicate opening delimiter: {open}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(TypesetConfig {
            inline_math: self.inline_math,
            display_math: self.display_math,
            process_escapes: self.process_escapes.unwrap_or(true),
            show_messages: self.show_messages.unwrap_or(false),
        })
    }
}
