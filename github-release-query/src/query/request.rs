//! Validated query requests.

use super::{Action, Token};

/// A fully validated request for a single query run.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Credential used to authenticate.
    pub token: Token,

    /// What to look up.
    pub action: Action,
}
