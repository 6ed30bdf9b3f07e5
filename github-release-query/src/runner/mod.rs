//! Runs one query end to end against GitHub.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::client::OctocrabAuthenticator;
use crate::query::{FailureReport, QueryResult};
use crate::service::ReleaseQueryService;
use tracing::info;

/// Runs a single configured query with the production GitHub client.
pub struct Runner {
    config: RunnerConfig,
    service: ReleaseQueryService<OctocrabAuthenticator>,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        let mut authenticator = OctocrabAuthenticator::new();
        if let Some(api_url) = config.api_url() {
            authenticator = authenticator.with_api_url(api_url);
        }
        Self {
            config,
            service: ReleaseQueryService::new(authenticator),
        }
    }

    /// Validates the parameters and executes the query.
    ///
    /// Queries are read-only, so check mode runs them unchanged.
    pub async fn run(&self) -> Result<QueryResult, RunnerError> {
        if self.config.check_mode() {
            info!("Check mode requested; queries are read-only, running normally");
        }

        let request = self.config.params().clone().into_request()?;
        Ok(self.service.run(&request).await?)
    }
}

impl From<&RunnerError> for FailureReport {
    fn from(error: &RunnerError) -> Self {
        Self::new(error.to_string(), error.tag().map(str::to_string))
    }
}
