use calculus_assistant::app::run_loop;
use calculus_assistant::terminal::{HELP, TITLE};

use client_core::config::RenderConfig;
use client_core::session::SolverSession;
use client_core::solver_client::SolverClient;
use client_core::typeset::{TypesetService, UnicodeTypesetter};

use models::TypesetConfig;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Interactive loop tests
// Input is a byte slice, output is captured in a Vec
// ============================================================================

async fn run_with_input(server: &MockServer, input: &str) -> String {
    let session = SolverSession::new(SolverClient::new(&server.uri()).unwrap());
    let mut typesetter = TypesetService::new(UnicodeTypesetter::new(), TypesetConfig::default());
    typesetter.mount().unwrap();

    let mut output = Vec::new();
    run_loop(
        input.as_bytes(),
        &mut output,
        &session,
        &typesetter,
        &RenderConfig::default(),
    )
    .await
    .unwrap();

    String::from_utf8(output).unwrap()
}

/// **VALUE**: A question typed at the prompt is solved, typeset and printed.
///
/// **BUG THIS CATCHES**: Would catch the loop printing the view before the
/// request settles, or forgetting the typesetting pass.
#[tokio::test]
async fn given_question_line_when_loop_runs_then_solution_printed() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/solve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solution": "$x = 2$",
            "steps": ["subtract 3", "divide by 2"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: One question, then quit
    let output = run_with_input(&server, "2x + 3 = 7\n:quit\n").await;

    // THEN
    assert!(output.starts_with(TITLE));
    assert!(output.contains("Question: 2x + 3 = 7\n"));
    assert!(output.contains("Solution: x = 2\n"));
    assert!(output.contains("  1. subtract 3\n  2. divide by 2\n"));
}

/// **VALUE**: The busy control is shown while a slow request is in flight.
///
/// **WHY THIS MATTERS**: Without feedback the user cannot tell a slow server
/// from a hung client.
#[tokio::test]
async fn given_slow_service_when_loop_runs_then_progress_line_precedes_result() {
    // GIVEN: A service that answers after a delay
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/solve"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "solution": "x = 2" }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    // WHEN
    let output = run_with_input(&server, "2x = 4\n").await;

    // THEN: Progress shown once, before the settled screen
    let progress = output.find("[ Solving... ] (busy)").unwrap();
    let solution = output.find("Solution: x = 2").unwrap();
    assert!(progress < solution);
    assert_eq!(output.matches("[ Solving... ] (busy)").count(), 1);
}

/// **VALUE**: `:help` prints usage without contacting the server; EOF exits cleanly.
///
/// **BUG THIS CATCHES**: Would catch commands being submitted as questions.
#[tokio::test]
async fn given_help_then_eof_when_loop_runs_then_no_request_sent() {
    // GIVEN: A server that must not be called
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Help, then end of input without :quit
    let output = run_with_input(&server, ":help\n").await;

    // THEN
    assert!(output.contains(HELP));
}

/// **VALUE**: A transport failure is printed as the fixed connect message and
/// the loop keeps running.
#[tokio::test]
async fn given_unreachable_server_when_loop_runs_then_connect_error_printed() {
    // GIVEN: Nothing listens on port 1
    let session = SolverSession::new(SolverClient::new("http://127.0.0.1:1").unwrap());
    let typesetter = TypesetService::new(UnicodeTypesetter::new(), TypesetConfig::default());

    // WHEN: Two questions in a row
    let mut output = Vec::new();
    run_loop(
        "first\nsecond\n".as_bytes(),
        &mut output,
        &session,
        &typesetter,
        &RenderConfig::default(),
    )
    .await
    .unwrap();
    let output = String::from_utf8(output).unwrap();

    // THEN: Both attempts report the connect failure
    assert_eq!(output.matches("Error: Failed to connect to server.").count(), 2);
}
