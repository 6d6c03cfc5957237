//! Tag bar: one button per tag in a single scrolling row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::view::TagControl;

/// Columns between two buttons
const BUTTON_GAP: u16 = 1;

fn button_width(label: &str) -> u16 {
    // One column of padding on each side
    u16::try_from(label.width())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Screen rectangles of the buttons that fit in `area`, as
/// `(tag index, rect)`. The row scrolls so `cursor` is always visible.
pub fn tag_button_layout(area: Rect, tags: &[TagControl], cursor: usize) -> Vec<(usize, Rect)> {
    if area.width == 0 || area.height == 0 || tags.is_empty() {
        return Vec::new();
    }
    let cursor = cursor.min(tags.len() - 1);

    // Walk back from the cursor to find the first button that still lets
    // the cursor button fit.
    let mut first = cursor;
    let mut used = button_width(&tags[cursor].label);
    while first > 0 {
        let needed = button_width(&tags[first - 1].label).saturating_add(BUTTON_GAP);
        if used.saturating_add(needed) > area.width {
            break;
        }
        used += needed;
        first -= 1;
    }

    let mut placed = Vec::new();
    let mut x = area.x;
    let right = area.x + area.width;
    for (index, tag) in tags.iter().enumerate().skip(first) {
        let width = button_width(&tag.label).min(right - x);
        placed.push((index, Rect::new(x, area.y, width, 1)));
        x = x.saturating_add(width + BUTTON_GAP);
        if x >= right {
            break;
        }
    }
    placed
}

/// Tag index under a screen position, if any
pub fn tag_at(layout: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
    layout
        .iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(index, _)| *index)
}

/// Renders the tag buttons; the active tag is highlighted and the cursor
/// is underlined while the bar has focus.
pub struct TagBar<'a> {
    tags: &'a [TagControl],
    cursor: usize,
    focused: bool,
}

impl<'a> TagBar<'a> {
    pub fn new(tags: &'a [TagControl], cursor: usize, focused: bool) -> Self {
        Self {
            tags,
            cursor,
            focused,
        }
    }
}

impl Widget for TagBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, rect) in tag_button_layout(area, self.tags, self.cursor) {
            let tag = &self.tags[index];
            let mut style = if tag.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            };
            if self.focused && index == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
            }
            buf.set_stringn(
                rect.x,
                rect.y,
                format!(" {} ", tag.label),
                rect.width as usize,
                style,
            );
        }
    }
}
