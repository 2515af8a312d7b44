mod builder;

pub use builder::TypesetConfigBuilder;

use serde::{Deserialize, Serialize};

/// An opening/closing delimiter pair, e.g. `$` / `$` or `\(` / `\)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    pub open: String,
    pub close: String,
}

impl DelimiterPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Configuration handed to the typesetting engine when it is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypesetConfig {
    pub inline_math: Vec<DelimiterPair>,
    pub display_math: Vec<DelimiterPair>,
    /// `\$` stands for a literal dollar sign outside math.
    pub process_escapes: bool,
    /// Engine progress/status messages.
    pub show_messages: bool,
}

impl Default for TypesetConfig {
    fn default() -> Self {
        Self {
            inline_math: vec![DelimiterPair::new("$", "$"), DelimiterPair::new("\\(", "\\)")],
            display_math: vec![
                DelimiterPair::new("$$", "$$"),
                DelimiterPair::new("\\[", "\\]"),
            ],
            process_escapes: true,
            show_messages: false,
        }
    }
}
