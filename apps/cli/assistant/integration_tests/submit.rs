use calculus_assistant::commands::solve::submit_question;

use client_core::config::RenderConfig;
use client_core::render::TrustPolicy;
use client_core::session::SolverSession;
use client_core::solver_client::SolverClient;
use client_core::typeset::{TypesetService, UnicodeTypesetter};

use models::{RenderMode, TypesetConfig};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// submit_question: solve, render, then typeset
// ============================================================================

async fn mock_response(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/solve"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn mounted_typesetter() -> TypesetService<UnicodeTypesetter> {
    let mut service = TypesetService::new(UnicodeTypesetter::new(), TypesetConfig::default());
    service.mount().unwrap();
    service
}

/// **VALUE**: A successful solve is typeset after the view is rendered.
///
/// **WHY THIS MATTERS**: Math notation is the whole point of the result
/// region; `$x^2 = 4$` must reach the user as `x² = 4`.
///
/// **BUG THIS CATCHES**: Would catch the typesetting pass being skipped, run
/// on the wrong blocks, or run before the view exists.
#[tokio::test]
async fn given_markup_solution_when_submitted_then_view_is_typeset() {
    // GIVEN: A service that answers with math markup
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/solve"))
        .and(body_json(json!({ "question": "x^2 = 4" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solution": "$x^2 = 4$",
            "steps": ["Take $\\sqrt{4}$", "so $x = \\pm 2$"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let session = SolverSession::new(SolverClient::new(&server.uri()).unwrap());
    let typesetter = mounted_typesetter();

    // WHEN: Submitting the question
    let view = submit_question(&session, &typesetter, &RenderConfig::default(), "x^2 = 4")
        .await
        .unwrap();

    // THEN: Solution and steps are typeset, the control is idle again
    let result = view.result.expect("result region should be present");
    assert_eq!(result.solution.text, "x² = 4");
    assert_eq!(result.solution.mode, RenderMode::Markup);
    assert_eq!(result.steps[0].text, "Take √4");
    assert_eq!(result.steps[1].text, "so x = ± 2");
    assert!(!view.submit.disabled);
    assert_eq!(view.question, "x^2 = 4");
    assert!(view.error.is_none());
}

/// **VALUE**: With typesetting disabled in config, markup is shown raw.
#[tokio::test]
async fn given_typesetting_disabled_when_submitted_then_markup_left_raw() {
    // GIVEN
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "solution": "$x^2 = 4$" })),
    )
    .await;
    let session = SolverSession::new(SolverClient::new(&server.uri()).unwrap());
    let typesetter = mounted_typesetter();
    let render = RenderConfig {
        typeset: false,
        ..RenderConfig::default()
    };

    // WHEN
    let view = submit_question(&session, &typesetter, &render, "x^2 = 4")
        .await
        .unwrap();

    // THEN
    assert_eq!(view.result.unwrap().solution.text, "$x^2 = 4$");
}

/// **VALUE**: Under the attested policy, an explicit `markup: false` keeps
/// dollar amounts as plain text.
///
/// **BUG THIS CATCHES**: Would catch the heuristic overriding the server's
/// attestation and mangling prices like `$5 and $10`.
#[tokio::test]
async fn given_markup_false_attestation_when_submitted_then_plain_text() {
    // GIVEN
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "solution": "It costs $5 and $10",
            "markup": false
        })),
    )
    .await;
    let session = SolverSession::new(SolverClient::new(&server.uri()).unwrap());
    let typesetter = mounted_typesetter();
    let render = RenderConfig {
        trust_policy: TrustPolicy::Attested,
        ..RenderConfig::default()
    };

    // WHEN
    let view = submit_question(&session, &typesetter, &render, "cost")
        .await
        .unwrap();

    // THEN
    let solution = view.result.unwrap().solution;
    assert_eq!(solution.mode, RenderMode::Plain);
    assert_eq!(solution.text, "It costs $5 and $10");
}

/// **VALUE**: A rejected question produces an error view and no typesetting.
///
/// **WHY THIS MATTERS**: The server's `detail` is the only explanation the
/// user gets for a bad input.
///
/// **BUG THIS CATCHES**: Would catch the detail being replaced by the generic
/// message, or a stale result region shown next to the error.
#[tokio::test]
async fn given_rejected_question_when_submitted_then_error_view() {
    // GIVEN
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({ "detail": "invalid expression" })),
    )
    .await;
    let session = SolverSession::new(SolverClient::new(&server.uri()).unwrap());
    let typesetter = mounted_typesetter();

    // WHEN
    let view = submit_question(&session, &typesetter, &RenderConfig::default(), "2x +")
        .await
        .unwrap();

    // THEN
    assert!(view.result.is_none());
    assert_eq!(view.error.as_deref(), Some("invalid expression"));
}

/// **VALUE**: An unmounted engine leaves the view untouched instead of failing.
#[tokio::test]
async fn given_unmounted_typesetter_when_submitted_then_raw_markup_shown() {
    // GIVEN: A service answering with markup and an engine never mounted
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "solution": "$x = 2$" })),
    )
    .await;
    let session = SolverSession::new(SolverClient::new(&server.uri()).unwrap());
    let typesetter = TypesetService::new(UnicodeTypesetter::new(), TypesetConfig::default());

    // WHEN
    let view = submit_question(&session, &typesetter, &RenderConfig::default(), "2x = 4")
        .await
        .unwrap();

    // THEN
    assert_eq!(view.result.unwrap().solution.text, "$x = 2$");
}

/// **VALUE**: Bracket-delimited math is typeset even though it contains no `$`.
///
/// **WHY THIS MATTERS**: `\(...\)` and `\[...\]` are configured delimiters; the
/// `$` heuristic only decides presentation, not whether math gets rendered.
///
/// **BUG THIS CATCHES**: Would catch typesetting limited to blocks the heuristic
/// classified as markup, which prints `\(x^2 = 4\)` raw.
#[tokio::test]
async fn given_bracket_delimited_math_when_submitted_then_view_is_typeset() {
    // GIVEN: A service answering with `\(...\)` and `\[...\]` and no attestation
    let server = MockServer::start().await;
    mock_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "solution": "\\(x^2 = 4\\)",
            "steps": ["\\[\\sqrt{4}\\]"]
        })),
    )
    .await;
    let session = SolverSession::new(SolverClient::new(&server.uri()).unwrap());
    let typesetter = mounted_typesetter();

    // WHEN
    let view = submit_question(&session, &typesetter, &RenderConfig::default(), "x^2 = 4")
        .await
        .unwrap();

    // THEN: Both blocks are converted, and still presented as plain text
    let result = view.result.expect("result region should be present");
    assert_eq!(result.solution.text, "x² = 4");
    assert_eq!(result.solution.mode, RenderMode::Plain);
    assert_eq!(result.steps[0].text, "√4");
}
