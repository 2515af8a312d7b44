pub mod config;
pub mod session;
pub mod solver_client;
pub mod typeset;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    SolverClient(#[from] solver_client::SolverClientError),

    #[error(transparent)]
    Session(#[from] session::SessionError),

    #[error(transparent)]
    Typeset(#[from] typeset::TypesetError),
}
