//! Read-only views of remote repositories, releases and assets.

/// A repository resolved through the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,
}

impl RepositoryHandle {
    /// Creates a handle for `owner/name`.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        let full_name = format!("{owner}/{name}");
        Self {
            owner,
            name,
            full_name,
        }
    }
}

/// A published release and its attached assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Git tag the release points at (e.g. "v1.2.0").
    pub tag_name: String,

    /// Assets in the order the API returned them.
    pub assets: Vec<Asset>,
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// File name of the asset.
    pub name: String,

    /// Public browser download URL.
    pub download_url: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: download_url.into(),
        }
    }
}
