//! Query error types.

use crate::client::ClientError;
use thiserror::Error;

/// Errors that terminate a release query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The token was rejected or the identity check failed.
    #[error("Failed to connect to GitHub: {reason}")]
    Authentication { reason: String },

    /// The repository does not exist (or is not visible to the token).
    #[error("Repository {owner}/{repo} doesn't exist")]
    NotFound { owner: String, repo: String },

    /// A parameter is missing or malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// The asset pattern matched nothing in the selected release.
    #[error("Regex found 0 matches for the following release {tag}")]
    NoAssetMatch { tag: String },

    /// The asset pattern matched more than one asset.
    #[error(
        "Regex found too many assets [{names}] associated with {tag} release, use a stricter regex",
        names = .assets.join(", ")
    )]
    AmbiguousAsset { tag: String, assets: Vec<String> },

    /// Any other API client failure.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl QueryError {
    /// Release tag associated with the failure, when one was resolved.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::NoAssetMatch { tag } => Some(tag),
            _ => None,
        }
    }
}
