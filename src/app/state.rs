//! Independent type definitions used by App.

use crate::bookmarks::Dataset;

/// Lifecycle of the dataset.
///
/// `Unloaded` moves to `Loaded` or `Failed` exactly once; both are final.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Load in progress; input is ignored
    #[default]
    Unloaded,
    /// Dataset available
    Loaded(Dataset),
    /// Load failed; the message replaces the stats line
    Failed(String),
}

impl LoadState {
    /// The dataset, when loaded
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Whether the transition out of `Unloaded` has already happened
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Unloaded)
    }
}

/// Which page region receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the search term
    #[default]
    Search,
    /// Tag bar: move between tags and apply one
    Tags,
    /// Link cards: select, open, copy
    Links,
}

impl Focus {
    /// Cycle Search -> Tags -> Links -> Search
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Tags,
            Focus::Tags => Focus::Links,
            Focus::Links => Focus::Search,
        }
    }
}
