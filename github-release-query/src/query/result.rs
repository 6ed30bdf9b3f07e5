//! Query result types.

use serde::Serialize;

/// Outcome of a successful query.
///
/// `changed` is always false: queries never modify remote state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// Always false.
    pub changed: bool,

    /// Tag of the resolved release, or `None` if no release resolved.
    pub tag: Option<String>,

    /// Download URL of the matched asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
}

impl QueryResult {
    /// No release resolved; a successful, empty answer.
    #[must_use]
    pub fn no_release() -> Self {
        Self {
            changed: false,
            tag: None,
            asset_url: None,
        }
    }

    /// The latest release tag.
    #[must_use]
    pub fn release(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::no_release()
        }
    }

    /// A single matched asset in the release tagged `tag`.
    #[must_use]
    pub fn asset(tag: impl Into<String>, asset_url: impl Into<String>) -> Self {
        Self {
            changed: false,
            tag: Some(tag.into()),
            asset_url: Some(asset_url.into()),
        }
    }
}

/// Structured report emitted when a query fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// Always true.
    pub failed: bool,

    /// Human-readable failure message.
    pub msg: String,

    /// Release tag the failure relates to, if one was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl FailureReport {
    #[must_use]
    pub fn new(msg: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            failed: true,
            msg: msg.into(),
            tag,
        }
    }
}

impl From<&super::QueryError> for FailureReport {
    fn from(error: &super::QueryError) -> Self {
        Self::new(error.to_string(), error.tag().map(str::to_string))
    }
}
