//! Asset selection by name pattern.

use crate::client::Asset;
use regex::Regex;

/// Result of filtering a release's assets by a name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetMatch<'a> {
    /// No asset name matched.
    None,

    /// Exactly one asset matched.
    One(&'a Asset),

    /// Several assets matched; their names in release order.
    Many(Vec<String>),
}

/// Filters `assets` to those whose name contains a match for `pattern`.
///
/// The search is unanchored: `linux` matches `app-linux.tar.gz`. Use `^` or
/// `$` in the pattern to pin either end.
pub fn match_assets<'a>(pattern: &Regex, assets: &'a [Asset]) -> AssetMatch<'a> {
    let matched: Vec<&Asset> = assets
        .iter()
        .filter(|asset| pattern.is_match(&asset.name))
        .collect();

    match matched.as_slice() {
        [] => AssetMatch::None,
        [asset] => AssetMatch::One(asset),
        many => AssetMatch::Many(many.iter().map(|asset| asset.name.clone()).collect()),
    }
}
