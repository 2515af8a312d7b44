use crate::{ErrorResponse, SolveRequest, SolveResponse, SolveResult};

use serde_json::json;

#[test]
fn given_question_when_serialized_then_body_has_single_question_field() {
    let body = serde_json::to_value(SolveRequest::new("2x + 3 = 7")).unwrap();

    assert_eq!(body, json!({ "question": "2x + 3 = 7" }));
}

/// **VALUE**: Missing or null response fields default to empty values.
///
/// **WHY THIS MATTERS**: The service omits `steps` for some inputs and returns
/// `{"detail": ...}` with a 200 status when solving throws. Neither may be treated
/// as a malformed response.
#[test]
fn given_partial_success_body_when_converted_then_missing_fields_are_empty() {
    // GIVEN: A body with only a detail field, and one with a null steps field
    let detail_only: SolveResponse =
        serde_json::from_value(json!({ "detail": "division by zero" })).unwrap();
    let null_steps: SolveResponse =
        serde_json::from_value(json!({ "solution": "$x = 2$", "steps": null })).unwrap();

    // WHEN: Converting to results
    let empty = SolveResult::from(detail_only);
    let solved = SolveResult::from(null_steps);

    // THEN: Absent fields become empty
    assert_eq!(empty, SolveResult::default());
    assert_eq!(solved.solution, "$x = 2$");
    assert!(solved.steps.is_empty());
    assert_eq!(solved.markup, None);
}

#[test]
fn given_attested_body_when_converted_then_markup_flag_is_kept() {
    let response: SolveResponse = serde_json::from_value(json!({
        "solution": "$x = 2$",
        "steps": ["subtract 3", "divide by 2"],
        "markup": true
    }))
    .unwrap();

    let result = SolveResult::from(response);

    assert_eq!(result.markup, Some(true));
    assert_eq!(result.steps, vec!["subtract 3", "divide by 2"]);
}

#[test]
fn given_error_bodies_when_reading_message_then_only_non_empty_strings_count() {
    let text: ErrorResponse =
        serde_json::from_value(json!({ "detail": "invalid expression" })).unwrap();
    let validation: ErrorResponse = serde_json::from_value(json!({
        "detail": [{ "loc": ["body", "question"], "msg": "field required" }]
    }))
    .unwrap();
    let empty: ErrorResponse = serde_json::from_value(json!({ "detail": "" })).unwrap();
    let missing: ErrorResponse = serde_json::from_value(json!({})).unwrap();

    assert_eq!(text.message(), Some("invalid expression"));
    assert_eq!(validation.message(), None);
    assert_eq!(empty.message(), None);
    assert_eq!(missing.message(), None);
}
