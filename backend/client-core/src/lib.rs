pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod solver_client;
pub mod typeset;
pub mod view;

#[cfg(test)]
mod tests;

pub const APP_NAME: &str = "calculus-assistant";
pub const SOLVER_SERVER_HOSTNAME: &str = "localhost";
pub const SOLVER_SERVER_PORT: u16 = 8000;
pub const SOLVER_SERVER_BASE_URL: &str =
    const_format::concatcp!("http://", SOLVER_SERVER_HOSTNAME, ":", SOLVER_SERVER_PORT);
pub const SOLVE_ENDPOINT: &str = "api/solve";

/// Shown when the service answered with a failure status but no `detail`.
pub const SERVER_FAILURE_MESSAGE: &str = "Something went wrong.";
/// Shown when no usable response was obtained at all.
pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect to server.";
