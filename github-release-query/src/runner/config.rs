//! Runner configuration.

use crate::params::QueryParams;

/// Configuration for a single query run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Parameters of the query to run.
    params: QueryParams,
    /// Custom GitHub API base URL (GitHub Enterprise).
    api_url: Option<String>,
    /// Whether the caller asked for a check-mode run.
    check_mode: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(params: QueryParams) -> Self {
        Self {
            params,
            api_url: None,
            check_mode: false,
        }
    }

    /// Sets a custom GitHub API base URL.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        self.api_url = api_url;
        self
    }

    /// Marks the run as check mode.
    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    /// Returns the query parameters.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Returns the custom API base URL, if any.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Returns whether check mode was requested.
    pub fn check_mode(&self) -> bool {
        self.check_mode
    }
}
