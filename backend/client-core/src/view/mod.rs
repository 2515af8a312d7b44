//! View model of the single screen, derived from [`UiState`].

use crate::render::{
    NO_SOLUTION_PLACEHOLDER, NO_STEP_PLACEHOLDER, TrustPolicy, may_typeset, render_block, sanitize,
};

use models::{RenderBlock, UiState};

use serde::Serialize;

pub const INPUT_PLACEHOLDER: &str = "Enter an algebra problem (e.g., 2x + 3 = 7)";
pub const SOLVE_LABEL: &str = "Solve";
pub const SOLVING_LABEL: &str = "Solving...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRegion {
    pub solution: RenderBlock,
    /// Ordered; empty means the step list is not shown.
    pub steps: Vec<RenderBlock>,
    /// False when the server attested the content is not markup.
    pub typeset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolverView {
    pub question: String,
    pub submit: SubmitControl,
    /// Present only when there is a non-empty solution.
    pub result: Option<ResultRegion>,
    /// Present only when there is a non-empty error.
    pub error: Option<String>,
}

impl SolverView {
    pub fn from_state(state: &UiState, policy: TrustPolicy) -> Self {
        let submit = SubmitControl {
            label: if state.loading { SOLVING_LABEL } else { SOLVE_LABEL },
            disabled: state.loading,
        };

        let result = state.has_result().then(|| ResultRegion {
            solution: render_block(
                policy,
                state.markup,
                &state.solution,
                NO_SOLUTION_PLACEHOLDER,
            ),
            steps: state
                .steps
                .iter()
                .map(|step| render_block(policy, state.markup, step, NO_STEP_PLACEHOLDER))
                .collect(),
            typeset: may_typeset(policy, state.markup),
        });

        let error = state.has_error().then(|| sanitize(&state.error));

        Self {
            question: state.question.clone(),
            submit,
            result,
            error,
        }
    }

    /// Every block the typesetting engine should process, in display order.
    ///
    /// That is the whole result region except placeholders, whatever each
    /// block's mode; the engine only rewrites delimited math.
    pub fn typeset_blocks_mut(&mut self) -> impl Iterator<Item = &mut RenderBlock> {
        self.result
            .iter_mut()
            .filter(|region| region.typeset)
            .flat_map(|region| std::iter::once(&mut region.solution).chain(region.steps.iter_mut()))
            .filter(|block| !block.is_placeholder())
    }
}
