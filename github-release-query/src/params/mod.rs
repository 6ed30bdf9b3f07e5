//! Invocation parameters.
//!
//! Parameters arrive either as command-line flags or as a JSON arguments
//! file written by an automation runner. Both end up in [`QueryParams`],
//! which is validated into a [`QueryRequest`] before any remote call is made.

mod error;

pub use error::ParamsError;

use crate::query::{Action, ActionKind, QueryError, QueryRequest, ReleaseSelector, Token};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Raw, unvalidated query parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryParams {
    /// GitHub personal access token.
    #[serde(default)]
    pub token: Option<Token>,

    /// Account that owns the repository.
    pub user: String,

    /// Repository name.
    pub repo: String,

    /// Action to perform.
    pub action: ActionKind,

    /// Pattern selecting one asset; required for `get_asset_url`.
    #[serde(default)]
    pub asset_regex: Option<String>,

    /// Release tag to inspect; defaults to `latest`.
    #[serde(default)]
    pub release_version: Option<String>,
}

impl QueryParams {
    /// Loads parameters from a JSON object file.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError`] if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, ParamsError> {
        debug!(path = %path.display(), "Loading parameters file");
        let content = std::fs::read_to_string(path).map_err(|e| ParamsError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ParamsError::JsonError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Uses `token` when the parameters do not carry one.
    #[must_use]
    pub fn with_fallback_token(mut self, token: Option<Token>) -> Self {
        if self.token.is_none() {
            self.token = token;
        }
        self
    }

    /// Validates the parameters into a [`QueryRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] if a required value is missing
    /// or empty, if `get_asset_url` lacks an `asset_regex`, or if the regex
    /// does not compile.
    pub fn into_request(self) -> Result<QueryRequest, QueryError> {
        let token = match self.token {
            Some(token) if !token.is_blank() => token,
            _ => return Err(invalid("token is required")),
        };
        if self.user.trim().is_empty() {
            return Err(invalid("user is required"));
        }
        if self.repo.trim().is_empty() {
            return Err(invalid("repo is required"));
        }

        let action = match self.action {
            ActionKind::LatestRelease => Action::LatestRelease,
            ActionKind::GetAssetUrl => {
                let pattern = self
                    .asset_regex
                    .ok_or_else(|| invalid("get_asset_url action requires an asset_regex"))?;
                let asset_pattern = Regex::new(&pattern).map_err(|e| {
                    QueryError::InvalidArgument(format!("invalid asset_regex '{pattern}': {e}"))
                })?;
                Action::GetAssetUrl {
                    asset_pattern,
                    release: ReleaseSelector::from_version(self.release_version.as_deref()),
                }
            }
        };

        Ok(QueryRequest {
            owner: self.user,
            repo: self.repo,
            token,
            action,
        })
    }
}

fn invalid(message: &str) -> QueryError {
    QueryError::InvalidArgument(message.to_string())
}
