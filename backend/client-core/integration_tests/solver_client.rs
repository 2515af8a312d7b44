use client_core::error::solver_client::SolverClientError;
use client_core::solver_client::SolverClient;
use client_core::{CONNECT_FAILURE_MESSAGE, SERVER_FAILURE_MESSAGE};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the solve exchange
// These drive a real SolverClient against a mock solving service
// ============================================================================

/// **VALUE**: Verifies the exact request the solving service receives.
///
/// **WHY THIS MATTERS**: The service only accepts `POST /api/solve` with a JSON body
/// holding a single `question` field. Any drift here turns every solve into a 404/422.
///
/// **BUG THIS CATCHES**: Would catch a wrong path join, a missing content type, or the
/// question being sent under another key.
#[tokio::test]
async fn given_question_when_solving_then_posts_json_question_to_solve_endpoint() {
    // GIVEN: A service that only answers the exact expected request
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/solve"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "question": "2x + 3 = 7" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solution": "2x=4",
            "steps": ["subtract 3", "divide by 2"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SolverClient::new(&server.uri()).unwrap();

    // WHEN: Solving
    let result = client.solve("2x + 3 = 7").await.unwrap();

    // THEN: Fields arrive in order
    assert_eq!(result.solution, "2x=4");
    assert_eq!(result.steps, vec!["subtract 3", "divide by 2"]);
}

#[test]
fn given_base_url_with_path_when_building_client_then_solve_path_is_appended() {
    let with_slash = SolverClient::new("http://127.0.0.1:8000/").unwrap();
    let with_prefix = SolverClient::with_options(
        "http://127.0.0.1:8000/tutor",
        "/api/solve",
        Duration::from_secs(1),
    )
    .unwrap();

    assert_eq!(with_slash.solve_url().as_str(), "http://127.0.0.1:8000/api/solve");
    assert_eq!(
        with_prefix.solve_url().as_str(),
        "http://127.0.0.1:8000/tutor/api/solve"
    );
}

#[test]
fn given_malformed_base_url_when_building_client_then_returns_url_parse_error() {
    let result = SolverClient::new("not a url");

    assert!(matches!(result, Err(SolverClientError::UrlParse { .. })));
}

#[tokio::test]
async fn given_failure_status_with_detail_when_solving_then_server_error_carries_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "invalid expression" })),
        )
        .mount(&server)
        .await;
    let client = SolverClient::new(&server.uri()).unwrap();

    let error = client.solve("2x +").await.unwrap_err();

    match &error {
        SolverClientError::Server { status, detail, .. } => {
            assert_eq!(status.0, 400);
            assert!(status.is_client_error());
            assert_eq!(detail.as_deref(), Some("invalid expression"));
        }
        other => panic!("Expected server error, got {other:?}"),
    }
    assert_eq!(error.user_message(), "invalid expression");
}

/// **VALUE**: A 5xx from the service is still a server-reported failure with its detail.
///
/// **BUG THIS CATCHES**: Would catch server-side crashes being reported as
/// connectivity problems when the service did answer.
#[tokio::test]
async fn given_server_failure_status_when_solving_then_server_error_class_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "detail": "solver busy" })))
        .mount(&server)
        .await;
    let client = SolverClient::new(&server.uri()).unwrap();

    let error = client.solve("x = 1").await.unwrap_err();

    match &error {
        SolverClientError::Server { status, .. } => {
            assert!(status.is_server_error());
            assert!(!status.is_client_error());
        }
        other => panic!("Expected server error, got {other:?}"),
    }
    assert_eq!(error.user_message(), "solver busy");
}

/// **VALUE**: FastAPI validation failures send `detail` as a list, not a string.
///
/// **BUG THIS CATCHES**: Would catch a client that fails to decode such bodies and
/// reports a connectivity problem for what is a rejected question.
#[tokio::test]
async fn given_failure_status_with_structured_detail_when_solving_then_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["body", "question"], "msg": "field required" }]
        })))
        .mount(&server)
        .await;
    let client = SolverClient::new(&server.uri()).unwrap();

    let error = client.solve("").await.unwrap_err();

    assert!(error.is_server_reported());
    assert_eq!(error.user_message(), SERVER_FAILURE_MESSAGE);
}

#[tokio::test]
async fn given_non_json_body_when_solving_then_reports_connect_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let client = SolverClient::new(&server.uri()).unwrap();

    let error = client.solve("x = 1").await.unwrap_err();

    assert!(matches!(error, SolverClientError::Json { .. }));
    assert_eq!(error.user_message(), CONNECT_FAILURE_MESSAGE);
}

/// **VALUE**: A slow service trips the configured client timeout.
///
/// **WHY THIS MATTERS**: Without a timeout, a hung service leaves the UI in
/// "Solving..." forever.
#[tokio::test]
async fn given_slow_service_when_timeout_elapses_then_reports_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "solution": "x" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let client =
        SolverClient::with_options(&server.uri(), "api/solve", Duration::from_millis(200)).unwrap();

    let error = client.solve("x").await.unwrap_err();

    assert!(matches!(error, SolverClientError::Transport { .. }));
    assert_eq!(error.user_message(), CONNECT_FAILURE_MESSAGE);
}

#[tokio::test]
async fn given_unreachable_port_when_solving_then_reports_transport_error() {
    // GIVEN: A port that definitely has no server listening
    let client = SolverClient::new("http://127.0.0.1:1").unwrap();

    let error = client.solve("x = 1").await.unwrap_err();

    assert!(matches!(error, SolverClientError::Transport { .. }));
    assert!(!error.is_server_reported());
}
