use serde::Serialize;

/// How a piece of server text is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderMode {
    /// Math markup: handed to the typesetting engine.
    Markup,
    /// Shown verbatim.
    Plain,
    /// Text was empty; a fixed placeholder is shown instead.
    Placeholder,
}

/// One renderable unit of the result region (the solution or a single step).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderBlock {
    pub mode: RenderMode,
    pub text: String,
}

impl RenderBlock {
    pub fn new(mode: RenderMode, text: impl Into<String>) -> Self {
        Self {
            mode,
            text: text.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.mode == RenderMode::Placeholder
    }
}
