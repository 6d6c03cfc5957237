//! Short-lived notifications for link actions (opened, copied, failed).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Most toasts shown at once; older ones are dropped first
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

impl ToastType {
    fn icon(self) -> &'static str {
        match self {
            ToastType::Info => "ℹ",
            ToastType::Success => "✓",
            ToastType::Error => "✗",
        }
    }

    fn color(self) -> Color {
        match self {
            ToastType::Info => Color::Cyan,
            ToastType::Success => Color::Green,
            ToastType::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    created_at: Instant,
}

impl Toast {
    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= TOAST_DURATION
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    queue: VecDeque<Toast>,
}

impl ToastManager {
    pub fn push(&mut self, message: impl Into<String>, toast_type: ToastType) {
        self.queue.push_back(Toast {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
        });
        while self.queue.len() > MAX_VISIBLE {
            self.queue.pop_front();
        }
    }

    /// Drop expired toasts
    pub fn update(&mut self) {
        self.expire_at(Instant::now());
    }

    fn expire_at(&mut self, now: Instant) {
        self.queue.retain(|t| !t.is_expired_at(now));
    }

    /// Toasts oldest first
    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Stacks toasts in the bottom-right corner of the area, newest lowest
pub struct ToastWidget<'a> {
    manager: &'a ToastManager,
}

impl<'a> ToastWidget<'a> {
    pub fn new(manager: &'a ToastManager) -> Self {
        Self { manager }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        const WIDTH: u16 = 36;
        const HEIGHT: u16 = 3;

        let width = WIDTH.min(area.width);
        for (stack_index, toast) in self.manager.visible().rev().enumerate() {
            let offset = (stack_index as u16 + 1) * HEIGHT;
            if offset > area.height {
                break;
            }
            let toast_area = Rect::new(
                area.right().saturating_sub(width + 1),
                area.bottom() - offset,
                width,
                HEIGHT,
            );

            Clear.render(toast_area, buf);
            let style = Style::default().fg(toast.toast_type.color());
            let text = Paragraph::new(Line::from(vec![
                Span::styled(toast.toast_type.icon(), style.add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(toast.message.as_str()),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .style(Style::default().bg(Color::Black)),
            );
            text.render(toast_area, buf);
        }
    }
}
