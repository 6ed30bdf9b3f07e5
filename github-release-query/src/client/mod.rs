//! The API client seam.
//!
//! The query service only talks to GitHub through these traits. Production
//! code uses [`OctocrabAuthenticator`]; tests plug in an in-memory client.

mod error;
mod github;
mod models;

pub use error::ClientError;
pub use github::{OctocrabAuthenticator, OctocrabClient};
pub use models::{Asset, Release, RepositoryHandle};

use crate::query::Token;
use async_trait::async_trait;

/// Exchanges a token for an authenticated [`ReleaseClient`].
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// The client handed out after a successful login.
    type Client: ReleaseClient;

    /// Logs in with `token` and verifies the session with an identity check.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthenticationFailed`] if the token is rejected.
    async fn authenticate(&self, token: &Token) -> Result<Self::Client, ClientError>;
}

/// Read-only access to a hosting service's repositories and releases.
#[async_trait]
pub trait ReleaseClient: Send + Sync {
    /// Returns the login of the authenticated account.
    async fn current_login(&self) -> Result<String, ClientError>;

    /// Looks up a repository, returning `None` if it does not exist.
    async fn repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<RepositoryHandle>, ClientError>;

    /// Returns the release the service designates as latest, if any.
    async fn latest_release(
        &self,
        repository: &RepositoryHandle,
    ) -> Result<Option<Release>, ClientError>;

    /// Lists every release of the repository in the service's order.
    async fn releases(&self, repository: &RepositoryHandle) -> Result<Vec<Release>, ClientError>;
}
