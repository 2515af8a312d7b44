use crate::{SolveResult, UiState};

#[test]
fn given_state_with_previous_result_when_request_begins_then_results_and_error_are_cleared() {
    // GIVEN: State left over from an earlier request
    let mut state = UiState {
        question: String::from("x^2 = 4"),
        solution: String::from("$x = \\pm 2$"),
        steps: vec![String::from("take square roots")],
        error: String::from("stale"),
        loading: false,
        markup: Some(true),
    };

    // WHEN: A new request begins
    state.begin_request();

    // THEN: Only the question survives and the busy flag is raised
    assert_eq!(state.question, "x^2 = 4");
    assert!(state.solution.is_empty());
    assert!(state.steps.is_empty());
    assert!(state.error.is_empty());
    assert_eq!(state.markup, None);
    assert!(state.loading);
}

#[test]
fn given_result_when_applied_and_settled_then_solution_and_steps_are_set_together() {
    let mut state = UiState::default();
    state.begin_request();

    state.apply_result(SolveResult {
        solution: String::from("2x=4"),
        steps: vec![String::from("subtract 3"), String::from("divide by 2")],
        markup: None,
    });
    state.settle();

    assert!(state.has_result());
    assert!(!state.has_error());
    assert_eq!(state.steps.len(), 2);
    assert!(!state.loading);
}
