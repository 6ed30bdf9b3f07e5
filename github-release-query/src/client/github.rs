//! [`ReleaseClient`] backed by the GitHub REST API via octocrab.

use super::error::github_message;
use super::{Asset, Authenticator, ClientError, Release, ReleaseClient, RepositoryHandle};
use crate::query::Token;
use async_trait::async_trait;
use octocrab::models::repos;
use octocrab::Octocrab;
use tracing::debug;

/// Results per page when listing releases.
const RELEASES_PER_PAGE: u8 = 100;

/// Logs in to GitHub with a personal access token.
#[derive(Debug, Clone, Default)]
pub struct OctocrabAuthenticator {
    /// Custom API base URL (GitHub Enterprise); `None` uses api.github.com.
    api_url: Option<String>,
}

impl OctocrabAuthenticator {
    /// Creates an authenticator for the public GitHub API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets a custom API base URL instead of api.github.com.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Returns the configured API base URL, if any.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    // The builder is not `Send`, so it must not live across an await.
    fn build_octocrab(&self, token: &Token) -> Result<Octocrab, ClientError> {
        let mut builder = Octocrab::builder().personal_token(token.expose().to_string());
        if let Some(api_url) = self.api_url() {
            builder = builder.base_uri(api_url)?;
        }
        Ok(builder.build()?)
    }
}

#[async_trait]
impl Authenticator for OctocrabAuthenticator {
    type Client = OctocrabClient;

    async fn authenticate(&self, token: &Token) -> Result<OctocrabClient, ClientError> {
        let client = OctocrabClient {
            octocrab: self.build_octocrab(token)?,
        };

        // The builder never talks to the API; this is the first real request.
        match client.current_login().await {
            Ok(login) => {
                debug!(login = %login, "Authenticated with GitHub");
                Ok(client)
            }
            Err(ClientError::GitHubError(e)) => Err(ClientError::AuthenticationFailed {
                reason: github_message(&e),
            }),
            Err(e) => Err(ClientError::AuthenticationFailed {
                reason: e.to_string(),
            }),
        }
    }
}

/// Authenticated GitHub client.
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Octocrab,
}

#[async_trait]
impl ReleaseClient for OctocrabClient {
    async fn current_login(&self) -> Result<String, ClientError> {
        let user = self.octocrab.current().user().await?;
        Ok(user.login)
    }

    async fn repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<RepositoryHandle>, ClientError> {
        match self.octocrab.repos(owner, name).get().await {
            Ok(repo) => {
                let owner = repo
                    .owner
                    .map(|author| author.login)
                    .unwrap_or_else(|| owner.to_string());
                Ok(Some(RepositoryHandle::new(owner, repo.name)))
            }
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn latest_release(
        &self,
        repository: &RepositoryHandle,
    ) -> Result<Option<Release>, ClientError> {
        match self
            .octocrab
            .repos(&repository.owner, &repository.name)
            .releases()
            .get_latest()
            .await
        {
            Ok(release) => Ok(Some(convert_release(release))),
            // GitHub answers 404 when a repository has no published release.
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn releases(&self, repository: &RepositoryHandle) -> Result<Vec<Release>, ClientError> {
        let first_page = self
            .octocrab
            .repos(&repository.owner, &repository.name)
            .releases()
            .list()
            .per_page(RELEASES_PER_PAGE)
            .send()
            .await?;

        let releases = self.octocrab.all_pages(first_page).await?;
        debug!(
            repo = %repository.full_name,
            count = releases.len(),
            "Listed releases"
        );
        Ok(releases.into_iter().map(convert_release).collect())
    }
}

fn convert_release(release: repos::Release) -> Release {
    Release {
        tag_name: release.tag_name,
        assets: release
            .assets
            .into_iter()
            .map(|asset| Asset::new(asset.name, asset.browser_download_url.to_string()))
            .collect(),
    }
}

fn is_not_found(error: &octocrab::Error) -> bool {
    match error {
        octocrab::Error::GitHub { source, .. } => source.status_code.as_u16() == 404,
        _ => false,
    }
}
