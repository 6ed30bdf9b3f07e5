use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use github_release_query::{
    Action, ActionKind, Asset, Authenticator, ClientError, QueryError, QueryParams, QueryResult,
    Release, ReleaseClient, ReleaseQueryService, ReleaseSelector, RepositoryHandle, Token,
};
use regex::Regex;

const VALID_TOKEN: &str = "tokenabc1234567890";

/// In-memory GitHub with a single repository.
#[derive(Clone, Default)]
struct FakeGitHub {
    repository: Option<RepositoryHandle>,
    latest: Option<Release>,
    releases: Vec<Release>,
    release_listings: Arc<AtomicUsize>,
}

impl FakeGitHub {
    fn with_releases(releases: Vec<Release>, latest: Option<Release>) -> Self {
        Self {
            repository: Some(RepositoryHandle::new("coreos", "rkt")),
            latest,
            releases,
            release_listings: Arc::default(),
        }
    }
}

#[async_trait]
impl Authenticator for FakeGitHub {
    type Client = FakeGitHub;

    async fn authenticate(&self, token: &Token) -> Result<FakeGitHub, ClientError> {
        if token.expose() == VALID_TOKEN {
            Ok(self.clone())
        } else {
            Err(ClientError::AuthenticationFailed {
                reason: "Bad credentials".to_string(),
            })
        }
    }
}

#[async_trait]
impl ReleaseClient for FakeGitHub {
    async fn current_login(&self) -> Result<String, ClientError> {
        Ok("testuser".to_string())
    }

    async fn repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<RepositoryHandle>, ClientError> {
        Ok(self
            .repository
            .clone()
            .filter(|repo| repo.owner == owner && repo.name == name))
    }

    async fn latest_release(
        &self,
        _repository: &RepositoryHandle,
    ) -> Result<Option<Release>, ClientError> {
        Ok(self.latest.clone())
    }

    async fn releases(&self, _repository: &RepositoryHandle) -> Result<Vec<Release>, ClientError> {
        self.release_listings.fetch_add(1, Ordering::SeqCst);
        Ok(self.releases.clone())
    }
}

fn release(tag: &str, asset_names: &[&str]) -> Release {
    Release {
        tag_name: tag.to_string(),
        assets: asset_names
            .iter()
            .map(|name| {
                Asset::new(
                    *name,
                    format!("https://github.com/coreos/rkt/releases/download/{tag}/{name}"),
                )
            })
            .collect(),
    }
}

fn params(action: ActionKind, asset_regex: Option<&str>, version: Option<&str>) -> QueryParams {
    QueryParams {
        token: Some(Token::new(VALID_TOKEN)),
        user: "coreos".to_string(),
        repo: "rkt".to_string(),
        action,
        asset_regex: asset_regex.map(str::to_string),
        release_version: version.map(str::to_string),
    }
}

async fn run(github: FakeGitHub, params: QueryParams) -> Result<QueryResult, QueryError> {
    let request = params.into_request()?;
    ReleaseQueryService::new(github).run(&request).await
}

fn standard_release() -> Release {
    release(
        "v1.0.0",
        &["app-linux.tar.gz", "app-darwin.tar.gz", "app.rpm"],
    )
}

#[tokio::test]
async fn rejected_token_is_authentication_error() {
    let github = FakeGitHub::with_releases(vec![], None);
    let mut params = params(ActionKind::LatestRelease, None, None);
    params.token = Some(Token::new("wrong"));

    let err = run(github, params).await.unwrap_err();
    match err {
        QueryError::Authentication { reason } => assert_eq!(reason, "Bad credentials"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn authenticate_returns_client_for_valid_token() {
    let service = ReleaseQueryService::new(FakeGitHub::with_releases(vec![], None));
    let client = service.authenticate(&Token::new(VALID_TOKEN)).await.unwrap();
    assert_eq!(client.current_login().await.unwrap(), "testuser");
}

#[tokio::test]
async fn missing_repository_is_not_found() {
    let github = FakeGitHub::default();

    let err = run(github, params(ActionKind::LatestRelease, None, None))
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::NotFound { .. }));
    assert_eq!(err.to_string(), "Repository coreos/rkt doesn't exist");
}

#[tokio::test]
async fn latest_release_returns_tag() {
    let latest = release("v1.20.0", &[]);
    let github = FakeGitHub::with_releases(vec![latest.clone()], Some(latest));

    let result = run(github, params(ActionKind::LatestRelease, None, None))
        .await
        .unwrap();
    assert_eq!(result, QueryResult::release("v1.20.0"));
    assert!(!result.changed);
}

#[tokio::test]
async fn latest_release_without_releases_is_null_tag() {
    let github = FakeGitHub::with_releases(vec![], None);

    let result = run(github, params(ActionKind::LatestRelease, None, None))
        .await
        .unwrap();
    assert_eq!(result, QueryResult::no_release());
}

#[tokio::test]
async fn get_asset_url_without_regex_is_invalid_argument() {
    let github = FakeGitHub::with_releases(vec![standard_release()], Some(standard_release()));

    let err = run(github, params(ActionKind::GetAssetUrl, None, Some("v1.0.0")))
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgument(_)));
}

#[tokio::test]
async fn ambiguous_pattern_lists_all_matches() {
    let github = FakeGitHub::with_releases(vec![standard_release()], Some(standard_release()));

    let err = run(
        github,
        params(ActionKind::GetAssetUrl, Some(r"\.tar\.gz$"), None),
    )
    .await
    .unwrap_err();

    match &err {
        QueryError::AmbiguousAsset { tag, assets } => {
            assert_eq!(tag, "v1.0.0");
            assert_eq!(assets, &["app-linux.tar.gz", "app-darwin.tar.gz"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("app-linux.tar.gz, app-darwin.tar.gz"));
}

#[tokio::test]
async fn single_match_returns_asset_url() {
    let github = FakeGitHub::with_releases(vec![standard_release()], Some(standard_release()));

    let result = run(
        github,
        params(ActionKind::GetAssetUrl, Some("linux.*tar.gz$"), Some("latest")),
    )
    .await
    .unwrap();

    assert_eq!(
        result,
        QueryResult::asset(
            "v1.0.0",
            "https://github.com/coreos/rkt/releases/download/v1.0.0/app-linux.tar.gz"
        )
    );
}

#[tokio::test]
async fn zero_matches_reports_release_tag() {
    let only_rpm = release("v3.1.0", &["app.rpm"]);
    let github = FakeGitHub::with_releases(vec![only_rpm.clone()], Some(only_rpm));

    let err = run(github, params(ActionKind::GetAssetUrl, Some(r"\.deb$"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::NoAssetMatch { .. }));
    assert_eq!(err.tag(), Some("v3.1.0"));
}

#[tokio::test]
async fn unknown_release_version_is_null_tag() {
    let github = FakeGitHub::with_releases(vec![standard_release()], Some(standard_release()));

    let result = run(
        github,
        params(ActionKind::GetAssetUrl, Some("linux"), Some("v2.0.0")),
    )
    .await
    .unwrap();
    assert_eq!(result, QueryResult::no_release());
}

#[tokio::test]
async fn pinned_release_version_is_used_instead_of_latest() {
    let old = release("v0.9.0", &["app-linux.tar.gz"]);
    let latest = standard_release();
    let github = FakeGitHub::with_releases(vec![latest.clone(), old], Some(latest));

    let result = run(
        github,
        params(ActionKind::GetAssetUrl, Some("linux"), Some("v0.9.0")),
    )
    .await
    .unwrap();
    assert_eq!(result.tag.as_deref(), Some("v0.9.0"));
    assert_eq!(
        result.asset_url.as_deref(),
        Some("https://github.com/coreos/rkt/releases/download/v0.9.0/app-linux.tar.gz")
    );
}

#[tokio::test]
async fn duplicate_release_tags_resolve_to_last_listed() {
    let first = release("v1.0.0", &["first-linux.tar.gz"]);
    let second = release("v1.0.0", &["second-linux.tar.gz"]);
    let github = FakeGitHub::with_releases(vec![first, second], None);
    let repository = RepositoryHandle::new("coreos", "rkt");
    let action = Action::GetAssetUrl {
        asset_pattern: Regex::new("linux").unwrap(),
        release: ReleaseSelector::Tag("v1.0.0".to_string()),
    };

    let result = github_release_query::execute(&github, &repository, &action)
        .await
        .unwrap();
    assert_eq!(
        result.asset_url.as_deref(),
        Some("https://github.com/coreos/rkt/releases/download/v1.0.0/second-linux.tar.gz")
    );
}

#[tokio::test]
async fn latest_selector_does_not_list_releases() {
    let github = FakeGitHub::with_releases(vec![standard_release()], Some(standard_release()));
    let listings = Arc::clone(&github.release_listings);

    run(github, params(ActionKind::GetAssetUrl, Some("rpm"), None))
        .await
        .unwrap();
    assert_eq!(listings.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn repeated_queries_are_identical() {
    let github = FakeGitHub::with_releases(vec![standard_release()], Some(standard_release()));

    let first = run(
        github.clone(),
        params(ActionKind::GetAssetUrl, Some("darwin"), None),
    )
    .await
    .unwrap();
    let second = run(github, params(ActionKind::GetAssetUrl, Some("darwin"), None))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert!(!first.changed);
}
