//! HTTP client for the solving service.

use crate::config::ServerConfig;
use crate::error::solver_client::SolverClientError;
use crate::SOLVE_ENDPOINT;

use common::{ErrorLocation, HttpStatusCode};

use models::{ErrorResponse, SolveRequest, SolveResponse, SolveResult};

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use log::{debug, error, warn};
use reqwest::Client;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Anything that can turn a question into a [`SolveResult`].
///
/// [`SolverClient`] is the production implementation; sessions are generic
/// over this so the transport can be swapped.
pub trait SolveService: Send + Sync {
    fn solve(
        &self,
        question: &str,
    ) -> impl Future<Output = Result<SolveResult, SolverClientError>> + Send;
}

#[derive(Clone)]
pub struct SolverClient {
    solve_url: Url,
    client: Client,
}

impl SolverClient {
    /// Client for `{base_url}/api/solve` with the default timeout.
    pub fn new(base_url_str: &str) -> Result<Self, SolverClientError> {
        Self::with_options(base_url_str, SOLVE_ENDPOINT, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, SolverClientError> {
        Self::with_options(
            &config.base_url,
            &config.solve_path,
            config.request_timeout(),
        )
    }

    pub fn with_options(
        base_url_str: &str,
        solve_path: &str,
        timeout: Duration,
    ) -> Result<Self, SolverClientError> {
        // Without a trailing slash `join` would replace the last path segment.
        let base_url = if base_url_str.ends_with('/') {
            Url::parse(base_url_str)?
        } else {
            Url::parse(&format!("{base_url_str}/"))?
        };
        let solve_url = base_url.join(solve_path.trim_start_matches('/'))?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { solve_url, client })
    }

    pub fn solve_url(&self) -> &Url {
        &self.solve_url
    }

    /// POST `{"question": ...}` and decode the answer.
    ///
    /// # Errors
    ///
    /// - [`SolverClientError::Server`] for a non-success status, with the
    ///   server's `detail` when it sent one
    /// - [`SolverClientError::Transport`] when no response was obtained
    /// - [`SolverClientError::Json`] when the body is not the expected JSON,
    ///   whatever the status
    pub async fn solve(&self, question: &str) -> Result<SolveResult, SolverClientError> {
        let response = self
            .client
            .post(self.solve_url.clone())
            .json(&SolveRequest::new(question))
            .send()
            .await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        let body = response.bytes().await?;
        debug!("Solver answered HTTP {status} with {} bytes", body.len());

        if !status.is_success() {
            let error: ErrorResponse = serde_json::from_slice(&body)?;
            let detail = error.message().map(str::to_string);
            let shown = detail.as_deref().unwrap_or("<no detail>");
            if status.is_server_error() {
                error!("Solver failed: HTTP {status} - {shown}");
            } else if status.is_client_error() {
                warn!("Solver rejected question: HTTP {status} - {shown}");
            } else {
                warn!("Solver answered unexpected HTTP {status} - {shown}");
            }
            return Err(SolverClientError::Server {
                status,
                detail,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let solved: SolveResponse = serde_json::from_slice(&body)?;
        Ok(SolveResult::from(solved))
    }
}

impl SolveService for SolverClient {
    async fn solve(&self, question: &str) -> Result<SolveResult, SolverClientError> {
        SolverClient::solve(self, question).await
    }
}
