use crate::render::TrustPolicy;
use crate::view::{SOLVE_LABEL, SOLVING_LABEL, SolverView};

use models::{RenderMode, UiState};

fn solved_state() -> UiState {
    UiState {
        question: String::from("2x + 3 = 7"),
        solution: String::from("$x = 2$"),
        steps: vec![
            String::from("Original equation: $2 x + 3 = 7$"),
            String::new(),
            String::from("Error solving equation: boom"),
        ],
        error: String::new(),
        loading: false,
        markup: None,
    }
}

/// **VALUE**: The submit control reflects the busy flag.
///
/// **BUG THIS CATCHES**: Would catch if the button stays enabled while a request is
/// in flight, the only guard against overlapping requests.
#[test]
fn given_loading_state_when_rendered_then_submit_is_disabled_and_relabelled() {
    // GIVEN: A request in flight
    let mut state = UiState::default();
    state.begin_request();

    // WHEN: Rendering
    let busy = SolverView::from_state(&state, TrustPolicy::Heuristic);
    state.settle();
    let idle = SolverView::from_state(&state, TrustPolicy::Heuristic);

    // THEN: Label and disabled flag follow loading
    assert_eq!(busy.submit.label, SOLVING_LABEL);
    assert!(busy.submit.disabled);
    assert_eq!(idle.submit.label, SOLVE_LABEL);
    assert!(!idle.submit.disabled);
}

#[test]
fn given_solved_state_when_rendered_then_result_region_keeps_step_order_and_modes() {
    let view = SolverView::from_state(&solved_state(), TrustPolicy::Heuristic);

    let result = view.result.expect("result region should be shown");
    assert_eq!(result.solution.mode, RenderMode::Markup);
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[0].mode, RenderMode::Markup);
    assert_eq!(result.steps[1].mode, RenderMode::Placeholder);
    assert_eq!(result.steps[1].text, "No step available");
    assert_eq!(result.steps[2].mode, RenderMode::Plain);
    assert!(view.error.is_none());
}

#[test]
fn given_empty_solution_when_rendered_then_result_region_is_hidden() {
    let mut state = solved_state();
    state.solution.clear();

    let view = SolverView::from_state(&state, TrustPolicy::Heuristic);

    assert!(view.result.is_none(), "Steps alone do not show the result region");
}

#[test]
fn given_error_state_when_rendered_then_only_error_region_is_shown() {
    let state = UiState {
        error: String::from("invalid expression"),
        ..UiState::default()
    };

    let view = SolverView::from_state(&state, TrustPolicy::Attested);

    assert!(view.result.is_none());
    assert_eq!(view.error.as_deref(), Some("invalid expression"));
}

/// **VALUE**: The typesetting pass sees every non-placeholder block of the result region.
///
/// **WHY THIS MATTERS**: `\(...\)` and `\[...\]` carry no `$`, so the heuristic
/// classifies them as plain text; they still have to be typeset.
///
/// **BUG THIS CATCHES**: Would catch the render mode deciding what gets typeset.
#[test]
fn given_solved_view_when_iterating_typeset_blocks_then_all_but_placeholders_are_yielded() {
    // GIVEN
    let mut view = SolverView::from_state(&solved_state(), TrustPolicy::Heuristic);

    // WHEN
    let texts: Vec<String> = view.typeset_blocks_mut().map(|block| block.text.clone()).collect();

    // THEN
    assert_eq!(
        texts,
        vec![
            "$x = 2$",
            "Original equation: $2 x + 3 = 7$",
            "Error solving equation: boom"
        ]
    );
}

/// **VALUE**: An explicit `markup: false` keeps the whole region away from the engine.
///
/// **BUG THIS CATCHES**: Would catch dollar amounts in attested plain text being
/// rewritten as math.
#[test]
fn given_attested_plain_result_when_iterating_typeset_blocks_then_none_are_yielded() {
    // GIVEN
    let state = UiState {
        markup: Some(false),
        ..solved_state()
    };
    let mut view = SolverView::from_state(&state, TrustPolicy::Attested);

    // WHEN
    let count = view.typeset_blocks_mut().count();

    // THEN
    assert_eq!(count, 0);
    assert!(!view.result.unwrap().typeset);
}
