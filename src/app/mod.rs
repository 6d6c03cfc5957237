//! Application state and the controller for navdeck.
//!
//! `App` owns the UI state. Every mutation that affects what is shown goes
//! through a named transition (`set_search_term`, `clear_search`,
//! `set_active_tag`), and each transition ends in a full [`App::render`].

mod actions;
mod state;

use std::sync::mpsc::{Receiver, TryRecvError};

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::bookmarks::{Dataset, DataSource, LoadError, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use crate::config::Config;
use crate::search::{filter_view, tag_index, ALL_TAG};
use crate::ui::header::Status;
use crate::ui::{GroupsState, PageView, SearchInput, SearchKeyResult, ToastManager};

pub use state::{Focus, LoadState};

/// Pending background load
type LoadReceiver = Receiver<Result<Dataset, LoadError>>;

/// Main application state
pub struct App {
    /// Dataset lifecycle
    pub load_state: LoadState,
    /// Search input; its text is the current search term
    pub search: SearchInput,
    /// Selected tag filter, or [`ALL_TAG`]
    pub active_tag: String,
    /// Last rendered page
    pub view: PageView,
    /// Focused region
    pub focus: Focus,
    /// Highlighted tag button in the tag bar
    pub tag_cursor: usize,
    /// Selected card (flat index over the rendered view)
    pub selected_card: usize,
    /// Scroll state of the groups area
    pub groups_state: GroupsState,
    /// Tag buttons as drawn last frame, for mouse hit-testing
    pub tag_hits: Vec<(usize, Rect)>,
    /// Groups area as drawn last frame
    pub groups_area: Rect,
    /// Whether the `?` overlay is open
    pub show_help: bool,
    /// Set to leave the event loop
    pub should_quit: bool,
    /// Transient notifications
    pub toast_manager: ToastManager,
    /// User configuration
    pub config: Config,
    loader: Option<LoadReceiver>,
}

impl App {
    /// Create an app in the `Unloaded` state
    pub fn new(config: Config) -> Self {
        Self {
            load_state: LoadState::Unloaded,
            search: SearchInput::default(),
            active_tag: ALL_TAG.to_string(),
            view: PageView::default(),
            focus: Focus::default(),
            tag_cursor: 0,
            selected_card: 0,
            groups_state: GroupsState::default(),
            tag_hits: Vec::new(),
            groups_area: Rect::default(),
            show_help: false,
            should_quit: false,
            toast_manager: ToastManager::default(),
            config,
            loader: None,
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Start loading `source` in the background
    pub fn start_loading(&mut self, source: DataSource) {
        if self.load_state.is_settled() || self.loader.is_some() {
            return;
        }
        self.loader = Some(source.spawn_load());
    }

    /// Check whether the background load has finished (non-blocking)
    pub fn poll_loader(&mut self) -> Option<Result<Dataset, LoadError>> {
        let rx = self.loader.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.loader = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Loader thread died without reporting
                self.loader = None;
                Some(Err(LoadError::Disconnected))
            }
        }
    }

    /// Perform the one-time `Unloaded -> Loaded | Failed` transition.
    ///
    /// Results arriving after the state has settled are ignored.
    pub fn apply_load_result(&mut self, result: Result<Dataset, LoadError>) {
        if self.load_state.is_settled() {
            return;
        }
        match result {
            Ok(data) => {
                tracing::info!(
                    groups = data.groups.len(),
                    links = data.link_count(),
                    "dataset loaded"
                );
                self.load_state = LoadState::Loaded(data);
                self.render();
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load dataset");
                self.load_state = LoadState::Failed(err.user_message().to_string());
            }
        }
    }

    /// Whether a dataset is available
    pub fn is_loaded(&self) -> bool {
        self.load_state.dataset().is_some()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Current search term
    pub fn search_term(&self) -> &str {
        self.search.text()
    }

    /// Replace the search term and re-render
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        if !self.is_loaded() {
            return;
        }
        self.search.set_text(term);
        self.render();
    }

    /// Feed a key to the search input; re-render when the term changed
    pub fn apply_search_key(&mut self, key: KeyEvent) -> SearchKeyResult {
        if !self.is_loaded() {
            return SearchKeyResult::Continue;
        }
        let result = self.search.handle_key(key);
        match result {
            SearchKeyResult::QueryChanged => self.render(),
            SearchKeyResult::Clear => self.clear_search(),
            SearchKeyResult::Continue | SearchKeyResult::Submit => {}
        }
        result
    }

    /// The clear control: empty the search term and its input, re-render
    pub fn clear_search(&mut self) {
        if !self.is_loaded() {
            return;
        }
        self.search.clear();
        self.render();
    }

    /// Select a tag filter and re-render
    pub fn set_active_tag(&mut self, tag: impl Into<String>) {
        if !self.is_loaded() {
            return;
        }
        self.active_tag = tag.into();
        self.render();
        if let Some(index) = self.view.tags.iter().position(|t| t.active) {
            self.tag_cursor = index;
        }
    }

    /// Recompute the page from the current state.
    ///
    /// No-op until a dataset is loaded. Stats and sections come from the
    /// filtered view; tag controls from the full dataset.
    pub fn render(&mut self) {
        let Some(data) = self.load_state.dataset() else {
            return;
        };
        let filtered = filter_view(&data.groups, self.search.text(), &self.active_tag);
        let tags = tag_index(&data.groups);
        self.view = PageView::build(&filtered, &tags, &self.active_tag);

        self.selected_card = self
            .selected_card
            .min(self.view.card_count().saturating_sub(1));
        self.tag_cursor = self.tag_cursor.min(self.view.tags.len().saturating_sub(1));
    }

    // =========================================================================
    // Display helpers
    // =========================================================================

    /// Page title for the header
    pub fn title(&self) -> &str {
        self.load_state
            .dataset()
            .map_or(DEFAULT_TITLE, Dataset::display_title)
    }

    /// Page description for the header
    pub fn description(&self) -> &str {
        self.load_state
            .dataset()
            .map_or(DEFAULT_DESCRIPTION, Dataset::display_description)
    }

    /// What the stats region shows
    pub fn status(&self) -> Status<'_> {
        match &self.load_state {
            LoadState::Unloaded => Status::Loading,
            LoadState::Loaded(_) => Status::Stats(&self.view.stats),
            LoadState::Failed(message) => Status::Error(message),
        }
    }

    /// Selected card index, if the view has any cards
    pub fn selected(&self) -> Option<usize> {
        (self.selected_card < self.view.card_count()).then_some(self.selected_card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{Group, Link, LOAD_FAILED_MESSAGE};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::path::PathBuf;

    fn dataset() -> Dataset {
        Dataset {
            title: Some("Team Links".to_string()),
            description: None,
            groups: vec![
                Group::new(
                    "Group A",
                    vec![
                        Link::new("https://example.com").with_title("Example Site"),
                        Link::new("https://x.dev").with_tags(["x"]),
                    ],
                ),
                Group::new("Group B", vec![Link::new("https://b.dev")]),
            ],
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(Config::default());
        app.apply_load_result(Ok(dataset()));
        app
    }

    fn parse_error() -> LoadError {
        LoadError::Parse {
            path: PathBuf::from("data.json"),
            source: serde_json::from_str::<Dataset>("{").unwrap_err(),
        }
    }

    #[test]
    fn unloaded_app_ignores_transitions() {
        let mut app = App::new(Config::default());
        app.set_search_term("example");
        app.set_active_tag("x");
        app.clear_search();
        app.render();

        assert_eq!(app.search_term(), "");
        assert_eq!(app.active_tag, ALL_TAG);
        assert_eq!(app.view, PageView::default());
        assert_eq!(app.status(), Status::Loading);
    }

    #[test]
    fn load_renders_full_view() {
        let app = loaded_app();
        assert_eq!(app.status(), Status::Stats("2 groups, 3 links"));
        assert_eq!(app.title(), "Team Links");
        assert_eq!(app.description(), DEFAULT_DESCRIPTION);
        assert_eq!(app.view.tags.len(), 2);
    }

    #[test]
    fn tag_and_search_transitions_rerender() {
        let mut app = loaded_app();

        app.set_active_tag("x");
        assert_eq!(app.status(), Status::Stats("1 groups, 1 links"));
        assert_eq!(app.tag_cursor, 1);

        app.set_active_tag(ALL_TAG);
        app.set_search_term("zzz999");
        assert_eq!(app.status(), Status::Stats("0 groups, 0 links"));
        assert!(app.view.groups.is_empty());
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn clearing_search_restores_tag_filtered_view_and_input() {
        let mut app = loaded_app();
        app.set_active_tag("x");
        for c in "zzz".chars() {
            app.apply_search_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(app.status(), Status::Stats("0 groups, 0 links"));

        app.clear_search();
        assert_eq!(app.search_term(), "");
        assert_eq!(app.search.cursor(), 0);
        assert_eq!(app.status(), Status::Stats("1 groups, 1 links"));
    }

    #[test]
    fn esc_in_search_activates_clear() {
        let mut app = loaded_app();
        app.set_search_term("example");
        assert_eq!(app.status(), Status::Stats("1 groups, 1 links"));

        let result = app.apply_search_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(result, SearchKeyResult::Clear);
        assert_eq!(app.status(), Status::Stats("2 groups, 3 links"));
    }

    #[test]
    fn failed_load_is_terminal() {
        let mut app = App::new(Config::default());
        app.apply_load_result(Err(parse_error()));
        assert_eq!(app.status(), Status::Error(LOAD_FAILED_MESSAGE));

        // A later success does not revive the page
        app.apply_load_result(Ok(dataset()));
        assert!(!app.is_loaded());
        app.set_search_term("example");
        assert_eq!(app.search_term(), "");
        assert!(app.view.groups.is_empty());
    }

    #[test]
    fn second_load_result_is_ignored() {
        let mut app = loaded_app();
        app.apply_load_result(Ok(Dataset::default()));
        assert_eq!(app.title(), "Team Links");
    }

    #[test]
    fn selection_is_clamped_after_filtering() {
        let mut app = loaded_app();
        app.selected_card = 2;
        app.set_active_tag("x");
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn loader_exiting_without_result_fails_the_load() {
        let mut app = App::new(Config::default());
        let (tx, rx) = std::sync::mpsc::channel();
        drop(tx);
        app.loader = Some(rx);

        let result = app.poll_loader();
        assert!(matches!(result, Some(Err(LoadError::Disconnected))));
        assert!(app.poll_loader().is_none());

        app.apply_load_result(Err(LoadError::Disconnected));
        assert_eq!(app.status(), Status::Error(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn background_load_reaches_loaded_state() {
        let mut app = App::new(Config::default());
        app.start_loading(DataSource::Preloaded(dataset()));

        let result = loop {
            if let Some(result) = app.poll_loader() {
                break result;
            }
            std::thread::yield_now();
        };
        app.apply_load_result(result);
        assert!(app.is_loaded());
        assert_eq!(app.status(), Status::Stats("2 groups, 3 links"));
    }
}
