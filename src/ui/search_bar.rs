//! Search input: an editable single-line query with a cursor, and its widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Result of processing a key in the search input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKeyResult {
    /// Cursor moved or key ignored; the query is unchanged
    Continue,
    /// Query text changed -- re-render
    QueryChanged,
    /// Esc pressed -- activate the clear control
    Clear,
    /// Enter pressed -- leave the input, keep the query
    Submit,
}

/// Editable search text. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    /// Current query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text and put the cursor at the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Empty the input
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Handle a key event while the input has focus
    pub fn handle_key(&mut self, key: KeyEvent) -> SearchKeyResult {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.text.is_empty() {
                    SearchKeyResult::Continue
                } else {
                    self.clear();
                    SearchKeyResult::QueryChanged
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                SearchKeyResult::QueryChanged
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.text.remove(at);
                    SearchKeyResult::QueryChanged
                } else {
                    SearchKeyResult::Continue
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_offset(self.cursor);
                    self.text.remove(at);
                    SearchKeyResult::QueryChanged
                } else {
                    SearchKeyResult::Continue
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                SearchKeyResult::Continue
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                SearchKeyResult::Continue
            }
            KeyCode::Home => {
                self.cursor = 0;
                SearchKeyResult::Continue
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                SearchKeyResult::Continue
            }
            KeyCode::Esc => SearchKeyResult::Clear,
            KeyCode::Enter | KeyCode::Down => SearchKeyResult::Submit,
            _ => SearchKeyResult::Continue,
        }
    }
}

/// Bordered search box. Shows a block cursor while focused.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a SearchInput, focused: bool) -> Self {
        Self { input, focused }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let prefix = "/ ";
        let mut spans = vec![Span::styled(prefix, Style::default().fg(Color::Yellow))];

        if self.input.text().is_empty() && !self.focused {
            spans.push(Span::styled(
                "type / to search titles, urls, descriptions, tags",
                Style::default().fg(Color::DarkGray),
            ));
            Paragraph::new(Line::from(spans)).render(inner, buf);
            return;
        }

        // Keep the cursor inside the visible window, measured in columns
        let available = usize::from(inner.width).saturating_sub(prefix.len());
        let chars: Vec<char> = self.input.text().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let width_of = |c: char| c.width().unwrap_or(0);

        let mut start = cursor;
        let mut used = chars.get(cursor).map_or(1, |&c| width_of(c).max(1));
        while start > 0 && used + width_of(chars[start - 1]) <= available {
            used += width_of(chars[start - 1]);
            start -= 1;
        }

        let mut width = 0;
        for (i, &c) in chars.iter().enumerate().skip(start) {
            let w = width_of(c);
            if width + w > available {
                break;
            }
            width += w;
            if self.focused && i == cursor {
                spans.push(Span::styled(
                    c.to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ));
            } else {
                spans.push(Span::raw(c.to_string()));
            }
        }
        if self.focused && cursor == chars.len() && width < available {
            spans.push(Span::styled(" ", Style::default().bg(Color::White)));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> SearchInput {
        let mut input = SearchInput::default();
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn typing_appends_and_reports_change() {
        let mut input = SearchInput::default();
        assert_eq!(
            input.handle_key(key(KeyCode::Char('r'))),
            SearchKeyResult::QueryChanged
        );
        input.handle_key(key(KeyCode::Char('s')));
        assert_eq!(input.text(), "rs");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn editing_handles_multibyte_characters() {
        let mut input = typed("héllo");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        assert_eq!(
            input.handle_key(key(KeyCode::Backspace)),
            SearchKeyResult::QueryChanged
        );
        assert_eq!(input.text(), "hllo");

        input.handle_key(key(KeyCode::Char('é')));
        assert_eq!(input.text(), "héllo");
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "hélo");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = typed("ab");
        input.handle_key(key(KeyCode::Home));
        assert_eq!(
            input.handle_key(key(KeyCode::Backspace)),
            SearchKeyResult::Continue
        );
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn esc_requests_clear_and_enter_submits() {
        let mut input = typed("ab");
        assert_eq!(input.handle_key(key(KeyCode::Esc)), SearchKeyResult::Clear);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), SearchKeyResult::Submit);
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn ctrl_u_clears_text() {
        let mut input = typed("ab");
        let result = input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(result, SearchKeyResult::QueryChanged);
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn set_text_moves_cursor_to_end() {
        let mut input = SearchInput::default();
        input.set_text("日本語");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn renders_query_inside_border() {
        let input = typed("rust");
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new(&input, false).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("/ rust"));
    }

    #[test]
    fn wide_query_scrolls_to_keep_cursor_visible() {
        let input = typed(&"中文".repeat(7));
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new(&input, true).render(area, &mut buf);

        // 16 columns after "/ ": seven wide chars, then the cursor cell
        assert_eq!(buf[(3, 1)].symbol(), "文");
        assert_eq!(buf[(15, 1)].symbol(), "文");
        assert_eq!(buf[(17, 1)].bg, Color::White);
        assert_eq!(buf[(19, 1)].symbol(), "│");
    }

    #[test]
    fn cursor_inside_wide_query_is_highlighted() {
        let mut input = typed("日本語");
        input.handle_key(key(KeyCode::Left));
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new(&input, true).render(area, &mut buf);

        assert_eq!(buf[(3, 1)].symbol(), "日");
        assert_eq!(buf[(7, 1)].symbol(), "語");
        assert_eq!(buf[(7, 1)].bg, Color::White);
    }
}
