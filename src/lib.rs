//! navdeck library crate.
//!
//! A terminal navigation page for a personal bookmark collection:
//! - Dataset loading and browser bookmark import
//! - Search normalization, filtering, and the tag index
//! - Terminal UI components and the event loop

pub mod app;
pub mod args;
pub mod bookmarks;
pub mod config;
pub mod event;
pub mod event_loop;
pub mod handlers;
pub mod logging;
pub mod search;
pub mod ui;
