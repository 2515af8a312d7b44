// Unit tests for the UI state store actor

use crate::session::{StateCommand, UiStore};

use models::SolveResult;

/// **VALUE**: `update` resolves only after the actor applied the command.
///
/// **WHY THIS MATTERS**: The session reads state right after updating it. If updates
/// were fire-and-forget, reads would race the actor and show stale state.
#[tokio::test]
async fn given_update_when_awaited_then_snapshot_reflects_command() {
    // GIVEN: A fresh store
    let store = UiStore::new();

    // WHEN: Setting the question
    store
        .update(StateCommand::SetQuestion(String::from("2x + 3 = 7")))
        .await
        .unwrap();

    // THEN: Visible immediately, no yielding needed
    assert_eq!(store.snapshot().question, "2x + 3 = 7");
}

#[tokio::test]
async fn given_request_cycle_when_applied_then_subscriber_sees_each_transition() {
    let store = UiStore::new();
    let mut rx = store.subscribe();

    store.update(StateCommand::BeginRequest).await.unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().loading);

    store
        .update(StateCommand::ApplyResult(SolveResult {
            solution: String::from("2x=4"),
            steps: vec![String::from("subtract 3"), String::from("divide by 2")],
            markup: None,
        }))
        .await
        .unwrap();
    store.update(StateCommand::Settle).await.unwrap();

    rx.changed().await.unwrap();
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.solution, "2x=4");
    assert_eq!(state.steps, vec!["subtract 3", "divide by 2"]);
    assert!(!state.loading);
}

#[tokio::test]
async fn given_cloned_store_when_updating_clone_then_original_sees_change() {
    let store = UiStore::new();
    let clone = store.clone();

    clone
        .update(StateCommand::ApplyError(String::from("Failed to connect to server.")))
        .await
        .unwrap();

    assert_eq!(store.snapshot().error, "Failed to connect to server.");
}
