//! Query actions and release selection.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Release version keyword that selects the latest release.
pub const LATEST: &str = "latest";

/// Name of a query action as it appears on the invocation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    LatestRelease,
    GetAssetUrl,
}

impl ActionKind {
    /// Returns the invocation name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LatestRelease => "latest_release",
            Self::GetAssetUrl => "get_asset_url",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest_release" => Ok(Self::LatestRelease),
            "get_asset_url" => Ok(Self::GetAssetUrl),
            other => Err(format!(
                "unknown action '{other}', expected one of: latest_release, get_asset_url"
            )),
        }
    }
}

/// Which release a [`Action::GetAssetUrl`] query targets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReleaseSelector {
    /// The release the API designates as latest.
    #[default]
    Latest,
    /// The release whose tag equals this value exactly.
    Tag(String),
}

impl ReleaseSelector {
    /// Parses an optional `release_version`; absent or `"latest"` selects the latest release.
    pub fn from_version(version: Option<&str>) -> Self {
        match version {
            None | Some(LATEST) => Self::Latest,
            Some(tag) => Self::Tag(tag.to_string()),
        }
    }
}

impl fmt::Display for ReleaseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str(LATEST),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// A validated query action.
#[derive(Debug, Clone)]
pub enum Action {
    /// Report the tag of the latest release.
    LatestRelease,

    /// Report the download URL of the single asset matching `asset_pattern`.
    GetAssetUrl {
        /// Unanchored pattern searched for in each asset name.
        asset_pattern: Regex,
        /// Release to inspect.
        release: ReleaseSelector,
    },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::LatestRelease => ActionKind::LatestRelease,
            Self::GetAssetUrl { .. } => ActionKind::GetAssetUrl,
        }
    }
}
