use client_core::session::{SolveOutcome, SolverSession};
use client_core::solver_client::SolverClient;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Request-cycle tests for SolverSession
// Each test drives one or more solve() calls against a mock solving service
// ============================================================================

async fn session_for(server: &MockServer) -> SolverSession<SolverClient> {
    SolverSession::new(SolverClient::new(&server.uri()).unwrap())
}

async fn mock_response(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/solve"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// **VALUE**: `loading` is raised while the request is in flight and lowered after.
///
/// **WHY THIS MATTERS**: The submit control is disabled from `loading`; if the flag is
/// raised late or never lowered, users either double-submit or get stuck.
///
/// **BUG THIS CATCHES**: Would catch `BeginRequest` being applied after the HTTP call,
/// or `Settle` being skipped on an error path.
#[tokio::test]
async fn given_slow_service_when_solving_then_loading_is_true_until_settled() {
    // GIVEN: A service that takes a moment to answer
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({ "solution": "2x=4", "steps": [] }))
            .set_delay(Duration::from_millis(300)),
    )
    .await;
    let session = session_for(&server).await;
    let mut rx = session.subscribe();

    // WHEN: Solving, observing state from the side
    let observer = tokio::spawn(async move {
        rx.changed().await.unwrap();
        rx.borrow_and_update().loading
    });
    let outcome = session.solve().await.unwrap();

    // THEN: The first change raised loading, and the final state is settled
    assert!(observer.await.unwrap(), "First change should raise loading");
    assert_eq!(outcome, SolveOutcome::Solved);
    assert!(!session.state().loading);
}

#[tokio::test]
async fn given_success_response_when_solving_then_solution_and_steps_are_stored_in_order() {
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "solution": "2x=4",
            "steps": ["subtract 3", "divide by 2"]
        })),
    )
    .await;
    let session = session_for(&server).await;
    session.set_question("2x + 3 = 7").await.unwrap();

    let outcome = session.solve().await.unwrap();

    let state = session.state();
    assert!(outcome.needs_typeset());
    assert_eq!(state.question, "2x + 3 = 7");
    assert_eq!(state.solution, "2x=4");
    assert_eq!(state.steps, vec!["subtract 3", "divide by 2"]);
    assert_eq!(state.error, "");
    assert!(!state.loading);
}

#[tokio::test]
async fn given_failure_with_detail_when_solving_then_error_is_detail_and_results_empty() {
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({ "detail": "invalid expression" })),
    )
    .await;
    let session = session_for(&server).await;

    let outcome = session.solve().await.unwrap();

    let state = session.state();
    assert_eq!(outcome, SolveOutcome::Rejected);
    assert!(!outcome.needs_typeset());
    assert_eq!(state.error, "invalid expression");
    assert!(state.solution.is_empty());
    assert!(state.steps.is_empty());
}

#[tokio::test]
async fn given_failure_without_detail_when_solving_then_error_is_generic_fallback() {
    let server = MockServer::start().await;
    mock_response(&server, ResponseTemplate::new(500).set_body_json(json!({}))).await;
    let session = session_for(&server).await;

    session.solve().await.unwrap();

    assert_eq!(session.state().error, "Something went wrong.");
}

/// **VALUE**: Transport failures collapse to one fixed message and leave results empty.
///
/// **BUG THIS CATCHES**: Would catch a raw reqwest error string leaking to the user, or
/// results from an earlier request surviving a failed one.
#[tokio::test]
async fn given_unreachable_service_after_success_when_solving_then_connect_message_and_no_results() {
    // GIVEN: A session that already holds a result
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "solution": "$x = 2$", "steps": ["a"] })),
    )
    .await;
    let session = session_for(&server).await;
    session.solve().await.unwrap();
    assert_eq!(session.state().solution, "$x = 2$");

    // WHEN: The service goes away and the user solves again
    drop(server);
    let outcome = session.solve().await.unwrap();

    // THEN: Connectivity message, previous results cleared
    let state = session.state();
    assert_eq!(outcome, SolveOutcome::Unreachable);
    assert_eq!(state.error, "Failed to connect to server.");
    assert!(state.solution.is_empty());
    assert!(state.steps.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn given_empty_question_when_solving_then_request_is_still_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/solve"))
        .and(wiremock::matchers::body_json(json!({ "question": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    let session = session_for(&server).await;

    let outcome = session.solve().await.unwrap();

    assert_eq!(outcome, SolveOutcome::Solved);
    assert!(!session.state().has_result(), "Missing fields default to empty");
}

/// **VALUE**: Solving is repeatable: same question, same response, same final state.
///
/// **BUG THIS CATCHES**: Would catch state that accumulates across requests, such as
/// steps being appended instead of replaced.
#[tokio::test]
async fn given_same_question_and_response_when_solving_twice_then_final_states_match() {
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "solution": "$x = 2$",
            "steps": ["subtract 3", "divide by 2"]
        })),
    )
    .await;
    let session = session_for(&server).await;
    session.set_question("2x + 3 = 7").await.unwrap();

    session.solve().await.unwrap();
    let first = session.state();
    session.solve().await.unwrap();
    let second = session.state();

    assert_eq!(first, second);
    assert_eq!(second.steps.len(), 2);
}
