use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub header: Rect,
    pub search: Rect,
    pub status: Rect,
    pub tags: Rect,
    pub groups: Rect,
    /// Empty when the help bar is hidden
    pub help: Rect,
}

/// Split the screen into header, search box, status line, tag bar, groups,
/// and an optional help bar at the bottom
pub fn create_page_layout(area: Rect, show_help_bar: bool) -> PageAreas {
    let help_height = u16::from(show_help_bar);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(help_height),
        ])
        .split(area);

    // chunks[4] is a spacer between the tag bar and the groups
    PageAreas {
        header: chunks[0],
        search: chunks[1],
        status: chunks[2],
        tags: chunks[3],
        groups: chunks[5],
        help: chunks[6],
    }
}
