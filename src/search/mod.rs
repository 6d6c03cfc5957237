//! Search and tag filtering over the bookmark dataset.

pub mod engine;
pub mod normalize;
pub mod tags;

pub use engine::{filter_view, matches_link};
pub use normalize::normalize;
pub use tags::{collate, tag_index};

/// Sentinel tag meaning "no tag filtering"
pub const ALL_TAG: &str = "all";
