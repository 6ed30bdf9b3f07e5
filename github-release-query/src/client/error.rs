//! API client error types.

use thiserror::Error;

/// Errors reported by a release API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The token was rejected or the identity check failed.
    #[error("{reason}")]
    AuthenticationFailed { reason: String },

    /// GitHub API error.
    #[error("GitHub API error: {}", github_message(.0))]
    GitHubError(#[from] octocrab::Error),
}

/// Returns the message GitHub sent with an error response.
///
/// octocrab's own `Display` only names the error variant.
pub(crate) fn github_message(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            format!("{} ({})", source.message, source.status_code)
        }
        other => other.to_string(),
    }
}
