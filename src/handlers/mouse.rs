use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::{App, Focus};
use crate::ui::tag_bar::tag_at;

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

/// Clicking a tag button activates it; the wheel moves the link selection.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    const SCROLL_CARDS: isize = 1;

    if !app.is_loaded() {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = tag_at(&app.tag_hits, mouse.column, mouse.row) {
                app.set_focus(Focus::Tags);
                app.tag_cursor = index;
                app.activate_tag_index(index);
            } else if contains(app.groups_area, mouse.column, mouse.row) {
                app.set_focus(Focus::Links);
            }
        }
        MouseEventKind::ScrollUp if contains(app.groups_area, mouse.column, mouse.row) => {
            app.move_selection(-SCROLL_CARDS);
        }
        MouseEventKind::ScrollDown if contains(app.groups_area, mouse.column, mouse.row) => {
            app.move_selection(SCROLL_CARDS);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{Dataset, Group, Link};
    use crate::config::Config;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(Config::default());
        app.apply_load_result(Ok(Dataset {
            title: None,
            description: None,
            groups: vec![Group::new(
                "Dev",
                vec![
                    Link::new("https://a.dev").with_tags(["dev"]),
                    Link::new("https://b.dev"),
                ],
            )],
        }));
        app.tag_hits = vec![(0, Rect::new(0, 6, 5, 1)), (1, Rect::new(6, 6, 5, 1))];
        app.groups_area = Rect::new(0, 8, 80, 20);
        app
    }

    #[test]
    fn clicking_tag_button_activates_it() {
        let mut app = loaded_app();
        handle_mouse_event(&mut app, click(7, 6));
        assert_eq!(app.active_tag, "dev");
        assert_eq!(app.focus, Focus::Tags);
        assert_eq!(app.view.stats, "1 groups, 1 links");
    }

    #[test]
    fn wheel_moves_selection_inside_groups() {
        let mut app = loaded_app();
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..click(10, 10)
        };
        handle_mouse_event(&mut app, scroll);
        assert_eq!(app.selected_card, 1);

        // Outside the groups area the wheel does nothing
        let outside = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            ..click(10, 2)
        };
        handle_mouse_event(&mut app, outside);
        assert_eq!(app.selected_card, 1);
    }

    #[test]
    fn clicks_before_load_are_ignored() {
        let mut app = App::new(Config::default());
        app.tag_hits = vec![(0, Rect::new(0, 6, 5, 1))];
        handle_mouse_event(&mut app, click(1, 6));
        assert_eq!(app.focus, Focus::Search);
    }
}
