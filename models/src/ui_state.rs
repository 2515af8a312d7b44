use crate::SolveResult;

/// Observable state of one solver session.
///
/// After a completed request exactly one of {`solution` + `steps`} or
/// `error` is meaningful; both are cleared when the next request starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub question: String,
    pub solution: String,
    pub steps: Vec<String>,
    pub error: String,
    pub loading: bool,
    /// Markup attestation of the last result, if the server sent one.
    pub markup: Option<bool>,
}

impl UiState {
    /// Reset for a new request: results and error cleared, busy flag raised.
    pub fn begin_request(&mut self) {
        self.solution.clear();
        self.steps.clear();
        self.error.clear();
        self.markup = None;
        self.loading = true;
    }

    pub fn apply_result(&mut self, result: SolveResult) {
        self.solution = result.solution;
        self.steps = result.steps;
        self.markup = result.markup;
    }

    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn settle(&mut self) {
        self.loading = false;
    }

    pub fn has_result(&self) -> bool {
        !self.solution.is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
