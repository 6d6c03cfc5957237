//! Group sections with their grids of link cards.
//!
//! Sections are laid out on a tall virtual canvas; the widget shows a
//! window of it, scrolled so the selected card stays on screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::ui::view::{GroupSection, LinkCard, PageView};

/// Rows taken by one card: border, title, url, description, tags, border
pub const CARD_HEIGHT: u32 = 6;

/// Rows taken by a section header
const HEADER_HEIGHT: u32 = 1;

/// Blank rows between sections
const SECTION_GAP: u32 = 1;

/// Columns between cards in a row
const CARD_GAP: u16 = 1;

/// Narrowest card before the grid drops a column
const MIN_CARD_WIDTH: u16 = 20;

/// Where a card sits on the virtual canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub section: usize,
    pub card: usize,
    pub x: u16,
    pub y: u32,
    pub width: u16,
    /// Whether the card is in the first row of its section
    pub first_row: bool,
}

/// Canvas positions of every header and card, in render order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupsLayout {
    /// `(section index, y)` per section header
    pub headers: Vec<(usize, u32)>,
    /// One slot per card, in flat card order
    pub cards: Vec<CardSlot>,
    /// Total canvas height
    pub height: u32,
}

/// Columns that fit in `width` without cards getting too narrow
fn effective_columns(width: u16, requested: u8) -> u16 {
    let mut columns = u16::from(requested.max(1));
    while columns > 1 && card_width(width, columns) < MIN_CARD_WIDTH {
        columns -= 1;
    }
    columns
}

fn card_width(width: u16, columns: u16) -> u16 {
    width.saturating_sub(CARD_GAP * (columns - 1)) / columns
}

/// Lay out the sections of `view` for a canvas `width` columns wide
pub fn layout_groups(view: &PageView, width: u16, columns: u8) -> GroupsLayout {
    let columns = effective_columns(width, columns);
    let card_width = card_width(width, columns);

    let mut layout = GroupsLayout::default();
    let mut y = 0u32;
    for (section_index, section) in view.groups.iter().enumerate() {
        if section_index > 0 {
            y += SECTION_GAP;
        }
        layout.headers.push((section_index, y));
        y += HEADER_HEIGHT;

        for (card_index, _) in section.cards.iter().enumerate() {
            let row = (card_index / columns as usize) as u32;
            let column = (card_index % columns as usize) as u16;
            layout.cards.push(CardSlot {
                section: section_index,
                card: card_index,
                x: column * (card_width + CARD_GAP),
                y: y + row * CARD_HEIGHT,
                width: card_width,
                first_row: row == 0,
            });
        }
        let rows = section.cards.len().div_ceil(columns as usize) as u32;
        y += rows * CARD_HEIGHT;
    }
    layout.height = y;
    layout
}

/// Scroll position of the groups area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupsState {
    pub scroll: u32,
}

impl GroupsState {
    /// Adjust scroll so the card at `selected` is fully inside a viewport
    /// `viewport` rows tall. The section header is kept in view for cards
    /// in a section's first row.
    pub fn ensure_visible(&mut self, layout: &GroupsLayout, selected: Option<usize>, viewport: u32) {
        let max_scroll = layout.height.saturating_sub(viewport);
        if let Some(slot) = selected.and_then(|i| layout.cards.get(i)) {
            let top = if slot.first_row {
                slot.y.saturating_sub(HEADER_HEIGHT)
            } else {
                slot.y
            };
            let bottom = slot.y + CARD_HEIGHT;
            // A card taller than the viewport is pinned at its top
            if top < self.scroll || bottom - top > viewport {
                self.scroll = top;
            } else if bottom > self.scroll + viewport {
                self.scroll = bottom.saturating_sub(viewport);
            }
        }
        self.scroll = self.scroll.min(max_scroll);
    }
}

/// Widget drawing the visible window of group sections
pub struct GroupsView<'a> {
    view: &'a PageView,
    columns: u8,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> GroupsView<'a> {
    pub fn new(view: &'a PageView, columns: u8) -> Self {
        Self {
            view,
            columns,
            selected: None,
            focused: false,
        }
    }

    /// Highlight the card at this flat index
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for GroupsView<'_> {
    type State = GroupsState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = layout_groups(self.view, area.width, self.columns);
        let viewport = u32::from(area.height);
        state.ensure_visible(&layout, self.selected, viewport);

        let top = state.scroll;
        let bottom = state.scroll + viewport;
        let screen_y = |y: u32| area.y + (y - state.scroll) as u16;

        for &(section_index, y) in &layout.headers {
            if y >= top && y + HEADER_HEIGHT <= bottom {
                let header_area = Rect::new(area.x, screen_y(y), area.width, 1);
                render_header(&self.view.groups[section_index], header_area, buf);
            }
        }

        for (flat_index, slot) in layout.cards.iter().enumerate() {
            if slot.y + CARD_HEIGHT <= top || slot.y >= bottom {
                continue;
            }
            let card = &self.view.groups[slot.section].cards[slot.card];
            let highlighted = self.focused && self.selected == Some(flat_index);

            // Cards cut by the viewport edge are drawn off-screen, then clipped
            let mut card_buf = Buffer::empty(Rect::new(0, 0, slot.width, CARD_HEIGHT as u16));
            render_card(card, highlighted, card_buf.area, &mut card_buf);
            let first_row = top.saturating_sub(slot.y);
            let last_row = (bottom - slot.y).min(CARD_HEIGHT);
            for row in first_row..last_row {
                for col in 0..slot.width {
                    buf[(area.x + slot.x + col, screen_y(slot.y + row))] =
                        card_buf[(col, row as u16)].clone();
                }
            }
        }
    }
}

fn render_header(section: &GroupSection, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(section.color.color())),
        Span::styled(
            section.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            section.count_label.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    Paragraph::new(line).render(area, buf);
}

fn render_card(card: &LinkCard, highlighted: bool, area: Rect, buf: &mut Buffer) {
    let border_style = if highlighted {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut chips = Vec::with_capacity(card.tags.len() * 2);
    for tag in &card.tags {
        if !chips.is_empty() {
            chips.push(Span::raw(" "));
        }
        chips.push(Span::styled(
            format!(" {tag} "),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));
    }

    let title_style = if highlighted {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(card.title.clone(), title_style)),
        Line::from(Span::styled(
            card.url.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            card.desc.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(chips),
    ];

    Paragraph::new(lines).block(block).render(area, buf);
}
