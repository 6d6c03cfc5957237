//! Bookmark data model: a dataset of named groups, each holding links.
//!
//! The dataset is read once and never mutated afterwards. Filtering derives
//! new group collections (see [`crate::search`]).

pub mod import;
pub mod loader;

use serde::{Deserialize, Deserializer, Serialize};

pub use loader::{DataSource, LoadError, LOAD_FAILED_MESSAGE};

/// Title shown when the dataset does not carry one
pub const DEFAULT_TITLE: &str = "My Navigation";

/// Description shown when the dataset does not carry one
pub const DEFAULT_DESCRIPTION: &str = "Your bookmarks, organized into a clean navigation page";

/// Placeholder shown on a card whose link has no description
pub const NO_DESCRIPTION: &str = "no description";

/// The whole navigation page: a title, a description, and ordered groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Groups in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<Group>,
}

impl Dataset {
    /// Title to display, falling back to [`DEFAULT_TITLE`]
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(DEFAULT_TITLE)
    }

    /// Description to display, falling back to [`DEFAULT_DESCRIPTION`]
    pub fn display_description(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Total number of links across all groups
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }
}

/// A named bucket of links, shown as one section of the page.
///
/// Identity is by name only for color derivation; two groups may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group name
    pub name: String,
    /// Links in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
}

impl Group {
    /// Create a group from a name and its links
    pub fn new(name: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            name: name.into(),
            links,
        }
    }
}

/// A single bookmarked URL with optional title, description, and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Target URL
    pub url: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Labels used for tag filtering
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Link {
    /// Create a link with only a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            url: url.into(),
            desc: None,
            tags: Vec::new(),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Title to display: the title, or the URL when the title is absent or empty
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(&self.url)
    }

    /// Description to display: the description, or [`NO_DESCRIPTION`]
    pub fn display_desc(&self) -> &str {
        non_empty(self.desc.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    /// Whether this link carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
