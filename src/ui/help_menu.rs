//! Keybinding help: the one-line hint bar and the `?` overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::app::Focus;

/// A single keybinding entry for display
struct HelpEntry {
    key: &'static str,
    label: &'static str,
}

const ENTRIES: &[HelpEntry] = &[
    HelpEntry { key: "/", label: "search" },
    HelpEntry { key: "Esc", label: "clear search" },
    HelpEntry { key: "Tab", label: "next pane" },
    HelpEntry { key: "t", label: "tags" },
    HelpEntry { key: "h/l", label: "prev/next tag" },
    HelpEntry { key: "Enter", label: "apply tag / open" },
    HelpEntry { key: "j/k", label: "nav links" },
    HelpEntry { key: "g/G", label: "first/last" },
    HelpEntry { key: "o", label: "open" },
    HelpEntry { key: "y", label: "copy url" },
    HelpEntry { key: "x", label: "clear search" },
    HelpEntry { key: "+/-", label: "columns" },
    HelpEntry { key: "?", label: "help" },
    HelpEntry { key: "q", label: "quit" },
    HelpEntry { key: "C-q", label: "quit" },
];

const ENTRIES_PER_ROW: usize = 5;

fn entry_spans(entry: &HelpEntry) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!(" {} ", entry.key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", entry.label), Style::default().fg(Color::White)),
    ]
}

/// Widget that renders the help menu overlay
#[derive(Default)]
pub struct HelpMenuWidget;

impl HelpMenuWidget {
    /// Area for the overlay: full width, just above the help bar
    pub fn calculate_area(screen: Rect) -> Rect {
        let rows = ENTRIES.len().div_ceil(ENTRIES_PER_ROW);
        let height = (rows as u16 + 2).min(screen.height); // +2 for top border + padding
        let y = screen.height.saturating_sub(height + 1); // +1 for help bar

        Rect {
            x: screen.x,
            y: screen.y + y,
            width: screen.width,
            height,
        }
    }
}

impl Widget for HelpMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines: Vec<Line> = ENTRIES
            .chunks(ENTRIES_PER_ROW)
            .map(|chunk| Line::from(chunk.iter().flat_map(entry_spans).collect::<Vec<_>>()))
            .collect();

        let block = Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " ? | Keybindings ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Black));

        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
    }
}

/// Bottom hint bar listing the keys that matter for the focused pane
pub struct HelpBar {
    focus: Focus,
}

impl HelpBar {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Search => &[
                ("type", "filter"),
                ("Esc", "clear"),
                ("Enter", "links"),
                ("Tab", "tags"),
                ("C-q", "quit"),
            ],
            Focus::Tags => &[
                ("h/l", "move"),
                ("Enter", "apply"),
                ("/", "search"),
                ("Tab", "links"),
                ("q", "quit"),
            ],
            Focus::Links => &[
                ("j/k", "nav"),
                ("o", "open"),
                ("y", "copy"),
                ("/", "search"),
                ("t", "tags"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints()
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key} "), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{label} "), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
