use crate::error::typeset::TypesetError;
use crate::typeset::Typesetter;
use crate::view::SolverView;

use common::ErrorLocation;

use models::TypesetConfig;

use std::panic::Location;

use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Unmounted,
    Mounted,
    TornDown,
}

/// Owns the typesetting engine for the lifetime of the application.
///
/// `mount` configures the engine exactly once; `teardown` releases it for
/// good. Typesetting is only performed while mounted.
pub struct TypesetService<T> {
    engine: T,
    config: TypesetConfig,
    state: EngineState,
}

impl<T: Typesetter> TypesetService<T> {
    pub fn new(engine: T, config: TypesetConfig) -> Self {
        Self {
            engine,
            config,
            state: EngineState::Unmounted,
        }
    }

    /// Configure the engine. Repeated calls warn and return `Ok`.
    ///
    /// # Errors
    ///
    /// [`TypesetError::TornDown`] after [`TypesetService::teardown`], or the
    /// engine's own configuration error.
    #[track_caller]
    pub fn mount(&mut self) -> Result<(), TypesetError> {
        match self.state {
            EngineState::Mounted => {
                warn!("Typesetting engine already mounted");
                Ok(())
            }
            EngineState::TornDown => Err(TypesetError::TornDown {
                location: ErrorLocation::from(Location::caller()),
            }),
            EngineState::Unmounted => {
                self.engine.configure(&self.config)?;
                self.state = EngineState::Mounted;
                info!(
                    "Typesetting engine mounted ({} inline, {} display delimiters)",
                    self.config.inline_math.len(),
                    self.config.display_math.len()
                );
                Ok(())
            }
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state == EngineState::Mounted
    }

    /// Typeset the result region of an already rendered view.
    ///
    /// Returns the number of blocks processed. When the engine is not mounted
    /// the view is left untouched and `Ok(0)` is returned.
    pub fn typeset_view(&self, view: &mut SolverView) -> Result<usize, TypesetError> {
        if !self.is_mounted() {
            debug!("Typesetting skipped: engine is {:?}", self.state);
            return Ok(0);
        }

        let mut processed = 0;
        for block in view.typeset_blocks_mut() {
            block.text = self.engine.typeset(&block.text)?;
            processed += 1;
        }

        if self.config.show_messages {
            info!("Typeset {processed} blocks");
        } else {
            debug!("Typeset {processed} blocks");
        }
        Ok(processed)
    }

    /// Release the engine. Later `mount` calls fail.
    pub fn teardown(&mut self) {
        match self.state {
            EngineState::Mounted => info!("Typesetting engine torn down"),
            EngineState::Unmounted => debug!("Tearing down an engine that was never mounted"),
            EngineState::TornDown => {
                warn!("Typesetting engine already torn down");
                return;
            }
        }
        self.state = EngineState::TornDown;
    }
}
