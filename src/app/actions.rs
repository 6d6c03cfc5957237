//! User actions on App: selection movement, tag bar, links, and layout.

use crate::ui::ToastType;

use super::{App, Focus};

impl App {
    // =========================================================================
    // Focus
    // =========================================================================

    /// Move focus to the next region
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Focus a specific region
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Toggle the keybinding overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // =========================================================================
    // Link selection
    // =========================================================================

    /// Move the card selection by `delta`, clamped to the view
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.view.card_count();
        if count == 0 {
            return;
        }
        self.selected_card = self
            .selected_card
            .saturating_add_signed(delta)
            .min(count - 1);
    }

    pub fn select_first(&mut self) {
        self.selected_card = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_card = self.view.card_count().saturating_sub(1);
    }

    /// URL of the selected card
    pub fn selected_url(&self) -> Option<&str> {
        self.selected()
            .and_then(|i| self.view.card_at(i))
            .map(|card| card.url.as_str())
    }

    /// Open the selected link in the system browser
    pub fn open_selected(&mut self) {
        let Some(url) = self.selected_url().map(str::to_string) else {
            self.toast_error("No link selected");
            return;
        };

        match webbrowser::open(&url) {
            Ok(()) => {
                tracing::info!(%url, "opened link");
                self.toast_success(format!("Opened {url}"));
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to open link");
                self.toast_error("Failed to open browser");
            }
        }
    }

    /// Copy the selected link's URL to the clipboard
    pub fn copy_selected_url(&mut self) {
        let Some(url) = self.selected_url().map(str::to_string) else {
            self.toast_error("No link selected");
            return;
        };

        // Copy to clipboard using arboard
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            if clipboard.set_text(&url).is_ok() {
                self.toast_success("Copied URL to clipboard");
            } else {
                self.toast_error("Failed to copy");
            }
        } else {
            self.toast_error("Clipboard unavailable");
        }
    }

    // =========================================================================
    // Tag bar
    // =========================================================================

    /// Move the tag bar cursor by `delta`, clamped to the tag list
    pub fn move_tag_cursor(&mut self, delta: isize) {
        let count = self.view.tags.len();
        if count == 0 {
            return;
        }
        self.tag_cursor = self.tag_cursor.saturating_add_signed(delta).min(count - 1);
    }

    /// Activate the tag under the tag bar cursor
    pub fn activate_tag_at_cursor(&mut self) {
        self.activate_tag_index(self.tag_cursor);
    }

    /// Activate the tag at `index` in the tag bar
    pub fn activate_tag_index(&mut self, index: usize) {
        if let Some(tag) = self.view.tags.get(index).map(|t| t.label.clone()) {
            self.set_active_tag(tag);
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Change card columns by `delta` and persist the setting
    pub fn adjust_card_columns(&mut self, delta: i8) {
        if !self.config.layout.adjust_card_columns(delta) {
            return;
        }
        self.toast_info(format!("{} card columns", self.config.layout.card_columns));
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save config");
            self.toast_error("Failed to save config");
        }
    }

    // =========================================================================
    // Toasts
    // =========================================================================

    pub fn toast_success(&mut self, message: impl Into<String>) {
        self.toast_manager.push(message, ToastType::Success);
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.toast_manager.push(message, ToastType::Error);
    }

    pub fn toast_info(&mut self, message: impl Into<String>) {
        self.toast_manager.push(message, ToastType::Info);
    }
}
