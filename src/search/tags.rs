//! Tag index: every distinct tag in the dataset, for the tag bar.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::bookmarks::Group;
use crate::search::ALL_TAG;

/// Locale-style ordering: case-insensitive first, then by the original text
/// so that distinct tags never compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Collect the sorted, de-duplicated tags across all links, prefixed with
/// the [`ALL_TAG`] sentinel.
pub fn tag_index(groups: &[Group]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tags: Vec<&str> = groups
        .iter()
        .flat_map(|group| group.links.iter())
        .flat_map(|link| link.tags.iter())
        .map(String::as_str)
        .filter(|tag| *tag != ALL_TAG && seen.insert(*tag))
        .collect();
    tags.sort_by(|a, b| collate(a, b));

    std::iter::once(ALL_TAG)
        .chain(tags)
        .map(str::to_string)
        .collect()
}
