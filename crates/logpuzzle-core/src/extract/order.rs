//! Dedup and ordering of extracted puzzle URLs.

use std::collections::HashSet;

/// Sort key of a puzzle URL: the substring after its last `-`.
///
/// `/~foo/puzzle-bar-aaab.jpg` → `aaab.jpg`. A fragment without `-` is its
/// own key. Keys compare as plain strings; the logs encode the piece
/// sequence (`aaaa`, `aaab`, ...) so that this ordering reassembles the
/// image.
pub fn sort_key(url: &str) -> &str {
    url.rsplit('-').next().unwrap_or(url)
}

/// Removes exact-string duplicates (keeping the first encounter) and sorts
/// ascending by [`sort_key`]. The sort is stable, so equal keys keep their
/// encounter order.
pub fn dedup_and_sort(found: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = found
        .into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect();
    unique.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
    unique
}
