//! The question/solve session behind the assistant's single screen.
//!
//! A [`SolverSession`] owns the UI state of one user: the pending question,
//! the last solution and steps, the last error and the busy flag. Every
//! [`SolverSession::solve`] call runs one request cycle:
//!
//! 1. results and error are cleared and `loading` is raised;
//! 2. one POST goes to the solving service;
//! 3. either solution + steps or an error message is stored;
//! 4. `loading` is lowered, whatever happened in between.
//!
//! Overlapping calls are not serialized against each other; a front-end is
//! expected to disable its submit control while `loading` is set.

pub mod store;

pub use store::{StateCommand, UiStore};

use crate::error::session::SessionError;
use crate::solver_client::SolveService;

use models::UiState;

use log::{debug, info, warn};
use tokio::sync::watch;
use uuid::Uuid;

/// How a request cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Solution and steps were stored; the view needs a typesetting pass.
    Solved,
    /// The service answered with a failure status.
    Rejected,
    /// No usable response was obtained.
    Unreachable,
}

impl SolveOutcome {
    pub fn needs_typeset(&self) -> bool {
        matches!(self, SolveOutcome::Solved)
    }
}

pub struct SolverSession<S> {
    service: S,
    store: UiStore,
}

impl<S: SolveService> SolverSession<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            store: UiStore::new(),
        }
    }

    /// Replace the pending question. No validation; empty is allowed.
    pub async fn set_question(&self, text: impl Into<String>) -> Result<(), SessionError> {
        self.store.update(StateCommand::SetQuestion(text.into())).await
    }

    /// Run one request cycle for the current question.
    ///
    /// Failures of the solving service are not errors here: they end up in
    /// `UiState::error` and are reported through [`SolveOutcome`]. `Err` is
    /// returned only if the state store itself failed.
    pub async fn solve(&self) -> Result<SolveOutcome, SessionError> {
        let request_id = Uuid::new_v4();
        let question = self.store.snapshot().question;

        info!("Solving question (request {request_id})");
        debug!("Question for request {request_id}: {question:?}");

        self.store.update(StateCommand::BeginRequest).await?;

        let applied = match self.service.solve(&question).await {
            Ok(result) => {
                info!(
                    "Request {request_id} solved with {} steps",
                    result.steps.len()
                );
                self.store
                    .update(StateCommand::ApplyResult(result))
                    .await
                    .map(|()| SolveOutcome::Solved)
            }
            Err(e) => {
                warn!("Request {request_id} failed: {e}");
                let outcome = if e.is_server_reported() {
                    SolveOutcome::Rejected
                } else {
                    SolveOutcome::Unreachable
                };
                self.store
                    .update(StateCommand::ApplyError(e.user_message().to_string()))
                    .await
                    .map(|()| outcome)
            }
        };

        // Runs even when storing the result failed.
        let settled = self.store.update(StateCommand::Settle).await;

        let outcome = applied?;
        settled?;
        Ok(outcome)
    }

    /// Current UI state.
    pub fn state(&self) -> UiState {
        self.store.snapshot()
    }

    /// Receiver notified after every state change, including the
    /// `loading = true` transition at the start of a request.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.store.subscribe()
    }
}
