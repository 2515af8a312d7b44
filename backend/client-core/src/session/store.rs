use crate::error::session::SessionError;

use common::ErrorLocation;

use models::{SolveResult, UiState};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, mpsc, oneshot, watch};

const COMMAND_CHANNEL_CAPACITY: usize = 100;

/// Commands that mutate UI state.
///
/// All state mutations go through the store actor via these commands, so a
/// result's solution and steps always land together.
#[derive(Debug, Clone)]
pub enum StateCommand {
    /// Replace the pending question.
    SetQuestion(String),

    /// Clear results and error, raise the busy flag.
    BeginRequest,

    /// Store a successful result (solution, steps and attestation at once).
    ApplyResult(SolveResult),

    /// Store a user-facing error message.
    ApplyError(String),

    /// Lower the busy flag.
    Settle,
}

struct Envelope {
    command: StateCommand,
    applied: oneshot::Sender<()>,
}

/// UI state store.
///
/// Uses an actor pattern: commands are applied sequentially by a dedicated
/// task and each `update` resolves only once its command has been applied.
/// Reads and subscriptions go through a `watch` channel, so they never wait
/// on a mutation.
#[derive(Clone)]
pub struct UiStore {
    /// Channel to send state mutation commands to the actor
    command_tx: Arc<Mutex<Option<mpsc::Sender<Envelope>>>>,

    /// Current state; the actor is the only writer
    state_tx: Arc<watch::Sender<UiState>>,
}

impl UiStore {
    /// Create a new store.
    ///
    /// The actor is lazily spawned on first update within an async context.
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(UiState::default());
        Self {
            command_tx: Arc::new(Mutex::new(None)),
            state_tx: Arc::new(state_tx),
        }
    }

    /// Apply a command and wait until the actor has done so.
    pub async fn update(&self, command: StateCommand) -> Result<(), SessionError> {
        let tx = self.ensure_actor().await;

        let (applied_tx, applied_rx) = oneshot::channel();
        tx.send(Envelope {
            command,
            applied: applied_tx,
        })
        .await
        .map_err(|e| SessionError::StateActor {
            message: format!("State actor died: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        applied_rx.await.map_err(|e| SessionError::StateActor {
            message: format!("State actor dropped command: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Current state (copy).
    pub fn snapshot(&self) -> UiState {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified after every applied command.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state_tx.subscribe()
    }

    async fn ensure_actor(&self) -> mpsc::Sender<Envelope> {
        let mut tx_guard = self.command_tx.lock().await;
        if let Some(tx) = tx_guard.as_ref() {
            return tx.clone();
        }

        let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        *tx_guard = Some(tx.clone());
        tokio::spawn(state_actor(rx, Arc::clone(&self.state_tx)));
        info!("UI state actor spawned");
        tx
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The state actor task.
///
/// Owns every mutation of the UI state and processes commands in arrival
/// order.
async fn state_actor(mut command_rx: mpsc::Receiver<Envelope>, state: Arc<watch::Sender<UiState>>) {
    debug!("UI state actor started");

    while let Some(Envelope { command, applied }) = command_rx.recv().await {
        state.send_modify(|ui| apply(ui, command));

        if applied.send(()).is_err() {
            warn!("State update applied but the caller stopped waiting");
        }
    }

    debug!("UI state actor stopped");
}

fn apply(ui: &mut UiState, command: StateCommand) {
    match command {
        StateCommand::SetQuestion(question) => {
            ui.question = question;
        }
        StateCommand::BeginRequest => {
            if ui.loading {
                warn!("Starting a request while another is still in flight");
            }
            ui.begin_request();
        }
        StateCommand::ApplyResult(result) => {
            debug!(
                "Applying result: {} chars of solution, {} steps",
                result.solution.len(),
                result.steps.len()
            );
            ui.apply_result(result);
        }
        StateCommand::ApplyError(message) => {
            debug!("Applying error: {message}");
            ui.apply_error(message);
        }
        StateCommand::Settle => {
            ui.settle();
        }
    }
}
