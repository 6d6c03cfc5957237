//! Filter engine: the visible subset of the dataset under a search term and
//! an active tag.

use crate::bookmarks::{Group, Link};
use crate::search::normalize::normalize;
use crate::search::ALL_TAG;

/// Build the normalized searchable text of a link within its group.
///
/// Fields are joined with a single space: title, url, description, every
/// tag, then the group name.
fn haystack(link: &Link, group_name: &str) -> String {
    let mut parts = Vec::with_capacity(4 + link.tags.len());
    parts.push(normalize(link.title.as_deref()));
    parts.push(normalize(Some(&link.url)));
    parts.push(normalize(link.desc.as_deref()));
    parts.extend(link.tags.iter().map(|t| normalize(Some(t))));
    parts.push(normalize(Some(group_name)));
    parts.join(" ")
}

/// Whether `link` survives the filter.
///
/// `term` must already be normalized.
pub fn matches_link(link: &Link, group_name: &str, term: &str, active_tag: &str) -> bool {
    let matches_term = term.is_empty() || haystack(link, group_name).contains(term);
    let matches_tag = active_tag == ALL_TAG || link.has_tag(active_tag);
    matches_term && matches_tag
}

/// Filter groups down to the links matching `search_term` and `active_tag`.
///
/// Groups left without links are dropped. Group and link order is kept.
/// The input is never modified; surviving links are cloned into new groups.
pub fn filter_view(groups: &[Group], search_term: &str, active_tag: &str) -> Vec<Group> {
    let term = normalize(Some(search_term));

    groups
        .iter()
        .filter_map(|group| {
            let links: Vec<Link> = group
                .links
                .iter()
                .filter(|link| matches_link(link, &group.name, &term, active_tag))
                .cloned()
                .collect();
            (!links.is_empty()).then(|| Group::new(group.name.clone(), links))
        })
        .collect()
}
