//! Page header (title and description) and the stats line below the search bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Two-line header: bold title, dim description
pub struct Header<'a> {
    title: &'a str,
    description: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self { title, description }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.description,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

/// What the stats region currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    /// Data not loaded yet
    Loading,
    /// Counts over the filtered view
    Stats(&'a str),
    /// Load failed; shown in place of the stats
    Error(&'a str),
}

impl Widget for Status<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span = match self {
            Status::Loading => Span::styled("Loading…", Style::default().fg(Color::DarkGray)),
            Status::Stats(text) => Span::styled(text, Style::default().fg(Color::Gray)),
            Status::Error(text) => Span::styled(
                text,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        Paragraph::new(Line::from(span)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn header_renders_title_then_description() {
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        Header::new("My Navigation", "bookmarks").render(area, &mut buf);
        assert!(row(&buf, 0).starts_with("My Navigation"));
        assert!(row(&buf, 1).starts_with("bookmarks"));
    }

    #[test]
    fn error_status_is_red() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        Status::Error("Unable to read data.").render(area, &mut buf);
        assert!(row(&buf, 0).starts_with("Unable to read data."));
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }
}
