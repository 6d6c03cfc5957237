pub use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};

use crate::bookmarks::{Dataset, LoadError};

/// Application events
#[derive(Debug)]
pub enum Event {
    /// Nothing happened before the poll timeout
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// The background dataset load finished
    Loaded(Result<Dataset, LoadError>),
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) => Event::Key(key),
            CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        }
    }
}
