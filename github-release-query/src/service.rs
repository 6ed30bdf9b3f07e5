//! The release query service.
//!
//! A query is a linear chain: authenticate, resolve the repository, then run
//! the requested [`Action`]. Every failure ends the query; an absent release
//! is a successful result with no tag.

use crate::client::{Authenticator, ClientError, Release, ReleaseClient, RepositoryHandle};
use crate::matching::{match_assets, AssetMatch};
use crate::query::{Action, QueryError, QueryRequest, QueryResult, ReleaseSelector, Token};
use regex::Regex;
use tracing::{debug, info, info_span, Instrument};

/// Answers release queries through an injected [`Authenticator`].
#[derive(Debug, Clone)]
pub struct ReleaseQueryService<A> {
    authenticator: A,
}

impl<A: Authenticator> ReleaseQueryService<A> {
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    /// Runs a complete query.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if authentication, repository lookup or the
    /// action itself fails.
    pub async fn run(&self, request: &QueryRequest) -> Result<QueryResult, QueryError> {
        let span = info_span!(
            "query",
            repo = %format!("{}/{}", request.owner, request.repo),
            action = %request.action.kind()
        );

        async {
            let client = self.authenticate(&request.token).await?;
            let repository = resolve_repository(&client, &request.owner, &request.repo).await?;
            let result = execute(&client, &repository, &request.action).await?;
            info!(tag = ?result.tag, "Query complete");
            Ok(result)
        }
        .instrument(span)
        .await
    }

    /// Logs in with `token` and confirms the session with an identity check.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Authentication`] if the token is rejected.
    pub async fn authenticate(&self, token: &Token) -> Result<A::Client, QueryError> {
        debug!("Authenticating");
        self.authenticator
            .authenticate(token)
            .await
            .map_err(|e| match e {
                ClientError::AuthenticationFailed { reason } => {
                    QueryError::Authentication { reason }
                }
                other => QueryError::Authentication {
                    reason: other.to_string(),
                },
            })
    }
}

/// Resolves `owner/name` to a repository handle.
///
/// # Errors
///
/// Returns [`QueryError::NotFound`] if the repository does not exist.
pub async fn resolve_repository<C: ReleaseClient>(
    client: &C,
    owner: &str,
    name: &str,
) -> Result<RepositoryHandle, QueryError> {
    client
        .repository(owner, name)
        .await?
        .ok_or_else(|| QueryError::NotFound {
            owner: owner.to_string(),
            repo: name.to_string(),
        })
}

/// Executes `action` against a resolved repository.
///
/// # Errors
///
/// Returns [`QueryError::NoAssetMatch`] or [`QueryError::AmbiguousAsset`]
/// when an asset pattern does not select exactly one asset, and
/// [`QueryError::Client`] on API failures.
pub async fn execute<C: ReleaseClient>(
    client: &C,
    repository: &RepositoryHandle,
    action: &Action,
) -> Result<QueryResult, QueryError> {
    match action {
        Action::LatestRelease => match client.latest_release(repository).await? {
            Some(release) => Ok(QueryResult::release(release.tag_name)),
            None => {
                info!(repo = %repository.full_name, "Repository has no releases");
                Ok(QueryResult::no_release())
            }
        },
        Action::GetAssetUrl {
            asset_pattern,
            release,
        } => match select_release(client, repository, release).await? {
            Some(release) => find_asset_url(&release, asset_pattern),
            None => {
                info!(
                    repo = %repository.full_name,
                    release = %release,
                    "No matching release"
                );
                Ok(QueryResult::no_release())
            }
        },
    }
}

/// Resolves the release a selector refers to.
///
/// When several releases carry the requested tag, the last one listed wins.
async fn select_release<C: ReleaseClient>(
    client: &C,
    repository: &RepositoryHandle,
    selector: &ReleaseSelector,
) -> Result<Option<Release>, ClientError> {
    match selector {
        ReleaseSelector::Latest => client.latest_release(repository).await,
        ReleaseSelector::Tag(tag) => {
            let releases = client.releases(repository).await?;
            Ok(releases
                .into_iter()
                .filter(|release| &release.tag_name == tag)
                .last())
        }
    }
}

fn find_asset_url(release: &Release, pattern: &Regex) -> Result<QueryResult, QueryError> {
    match match_assets(pattern, &release.assets) {
        AssetMatch::One(asset) => {
            debug!(tag = %release.tag_name, asset = %asset.name, "Matched asset");
            Ok(QueryResult::asset(&release.tag_name, &asset.download_url))
        }
        AssetMatch::None => Err(QueryError::NoAssetMatch {
            tag: release.tag_name.clone(),
        }),
        AssetMatch::Many(assets) => Err(QueryError::AmbiguousAsset {
            tag: release.tag_name.clone(),
            assets,
        }),
    }
}
