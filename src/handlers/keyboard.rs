use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus};
use crate::ui::SearchKeyResult;

/// Route a key press to the focused region.
///
/// Quit and help work in every state; everything else is ignored until a
/// dataset is loaded.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // True global keybindings
    if let (KeyCode::Char('q' | 'c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    if !app.is_loaded() {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('?') => app.toggle_help(),
            _ => {}
        }
        return;
    }

    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::Tags => handle_tags_key(app, key),
        Focus::Links => handle_links_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.cycle_focus(),
        _ => {
            if app.apply_search_key(key) == SearchKeyResult::Submit {
                app.set_focus(Focus::Links);
            }
        }
    }
}

fn handle_tags_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_tag_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_tag_cursor(1),
        KeyCode::Home => app.move_tag_cursor(isize::MIN),
        KeyCode::End => app.move_tag_cursor(isize::MAX),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_tag_at_cursor(),
        _ => handle_common_key(app, key),
    }
}

fn handle_links_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::PageDown => app.move_selection(5),
        KeyCode::PageUp => app.move_selection(-5),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter | KeyCode::Char('o') => app.open_selected(),
        KeyCode::Char('y') => app.copy_selected_url(),
        _ => handle_common_key(app, key),
    }
}

/// Keys shared by the tag bar and the link grid
fn handle_common_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Char('t') => app.set_focus(Focus::Tags),
        KeyCode::Esc => app.set_focus(Focus::Links),
        KeyCode::Char('x') => app.clear_search(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_card_columns(1),
        KeyCode::Char('-') => app.adjust_card_columns(-1),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{Dataset, Group, Link};
    use crate::config::Config;
    use crate::search::ALL_TAG;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(Config::default());
        app.apply_load_result(Ok(Dataset {
            title: None,
            description: None,
            groups: vec![
                Group::new(
                    "Group A",
                    vec![
                        Link::new("https://example.com").with_title("Example Site"),
                        Link::new("https://x.dev").with_tags(["x"]),
                    ],
                ),
                Group::new("Group B", vec![Link::new("https://b.dev")]),
            ],
        }));
        app
    }

    #[test]
    fn keystrokes_rerender_per_character() {
        let mut app = loaded_app();
        type_text(&mut app, "exa");
        assert_eq!(app.search_term(), "exa");
        assert_eq!(app.view.stats, "1 groups, 1 links");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.stats, "2 groups, 3 links");
    }

    #[test]
    fn quit_keys_are_typed_into_search() {
        let mut app = loaded_app();
        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.search_term(), "q");

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn tag_bar_navigation_applies_tag() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Tags);

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_tag, "x");
        assert_eq!(app.view.stats, "1 groups, 1 links");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.active_tag, ALL_TAG);
    }

    #[test]
    fn enter_in_search_moves_to_links_and_x_clears() {
        let mut app = loaded_app();
        type_text(&mut app, "zzz999");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Links);
        assert_eq!(app.view.stats, "0 groups, 0 links");

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.search_term(), "");
        assert_eq!(app.view.stats, "2 groups, 3 links");

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_card, 1);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Search);
    }

    #[test]
    fn input_is_ignored_until_loaded() {
        let mut app = App::new(Config::default());
        type_text(&mut app, "abc");
        assert_eq!(app.search_term(), "");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
