//! Page view model: the filtered dataset projected into what is drawn.
//!
//! Building a [`PageView`] is pure; widgets only read from it. Each render
//! replaces the whole view.

use crate::bookmarks::{Group, Link};
use crate::ui::palette::{color_for, GroupColor};

/// Summary line over the filtered view, e.g. `"2 groups, 3 links"`
pub fn stats_label(group_count: usize, link_count: usize) -> String {
    format!("{group_count} groups, {link_count} links")
}

/// Per-group link count label, e.g. `"3 links"`
pub fn link_count_label(count: usize) -> String {
    format!("{count} links")
}

/// A tag button in the tag bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagControl {
    pub label: String,
    pub active: bool,
}

/// A single link card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCard {
    pub title: String,
    pub url: String,
    pub desc: String,
    pub tags: Vec<String>,
}

impl From<&Link> for LinkCard {
    fn from(link: &Link) -> Self {
        Self {
            title: link.display_title().to_string(),
            url: link.url.clone(),
            desc: link.display_desc().to_string(),
            tags: link.tags.clone(),
        }
    }
}

/// A group section: colored marker, name, count, and its cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSection {
    pub name: String,
    pub color: GroupColor,
    pub count_label: String,
    pub cards: Vec<LinkCard>,
}

impl From<&Group> for GroupSection {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            color: color_for(&group.name),
            count_label: link_count_label(group.links.len()),
            cards: group.links.iter().map(LinkCard::from).collect(),
        }
    }
}

/// Everything the page shows for one state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub stats: String,
    pub tags: Vec<TagControl>,
    pub groups: Vec<GroupSection>,
}

impl PageView {
    /// Project a filtered view and the full tag index into a page.
    ///
    /// Stats and sections come from `filtered`; tag controls come from
    /// `tag_index` in its given order.
    pub fn build(filtered: &[Group], tag_index: &[String], active_tag: &str) -> Self {
        let link_count = filtered.iter().map(|g| g.links.len()).sum();
        Self {
            stats: stats_label(filtered.len(), link_count),
            tags: tag_index
                .iter()
                .map(|tag| TagControl {
                    label: tag.clone(),
                    active: tag == active_tag,
                })
                .collect(),
            groups: filtered.iter().map(GroupSection::from).collect(),
        }
    }

    /// Number of cards across all sections
    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }

    /// Card at a flat index (sections in order, cards in order)
    pub fn card_at(&self, index: usize) -> Option<&LinkCard> {
        self.groups.iter().flat_map(|g| g.cards.iter()).nth(index)
    }
}
