use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{poll, read};
use ratatui::{backend::Backend, Frame, Terminal};

use crate::app::{App, Focus};
use crate::event::Event;
use crate::handlers::{handle_key_event, handle_mouse_event};
use crate::ui::layout::create_page_layout;
use crate::ui::tag_bar::tag_button_layout;
use crate::ui::{
    GroupsView, Header, HelpBar, HelpMenuWidget, SearchBar, TagBar, ToastWidget,
};

/// How long to wait for terminal input before checking on the loader
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Update toast manager (remove expired)
        app.toast_manager.update();

        // Draw UI
        terminal.draw(|f| draw_ui(f, app))?;

        let event = match app.poll_loader() {
            Some(result) => Event::Loaded(result),
            None => next_terminal_event()?,
        };
        dispatch(app, event);

        if app.should_quit {
            return Ok(());
        }
    }
}

fn next_terminal_event() -> io::Result<Event> {
    if poll(POLL_INTERVAL)? {
        Ok(Event::from(read()?))
    } else {
        Ok(Event::Tick)
    }
}

/// Apply one event to the app
pub fn dispatch(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Loaded(result) => app.apply_load_result(result),
        // The next draw picks up the new size
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Draw every region from the current state
pub fn draw_ui(f: &mut Frame, app: &mut App) {
    let areas = create_page_layout(f.area(), app.config.layout.show_help_bar);

    f.render_widget(Header::new(app.title(), app.description()), areas.header);
    f.render_widget(
        SearchBar::new(&app.search, app.focus == Focus::Search),
        areas.search,
    );
    f.render_widget(app.status(), areas.status);

    // Remember where things were drawn for mouse hit-testing
    app.tag_hits = tag_button_layout(areas.tags, &app.view.tags, app.tag_cursor);
    app.groups_area = areas.groups;

    f.render_widget(
        TagBar::new(&app.view.tags, app.tag_cursor, app.focus == Focus::Tags),
        areas.tags,
    );

    let groups = GroupsView::new(&app.view, app.config.layout.card_columns)
        .selected(app.selected())
        .focused(app.focus == Focus::Links);
    f.render_stateful_widget(groups, areas.groups, &mut app.groups_state);

    if areas.help.height > 0 {
        f.render_widget(HelpBar::new(app.focus), areas.help);
    }

    if app.show_help {
        f.render_widget(HelpMenuWidget, HelpMenuWidget::calculate_area(f.area()));
    }

    if !app.toast_manager.is_empty() {
        f.render_widget(ToastWidget::new(&app.toast_manager), areas.groups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{Dataset, Group, Link, LOAD_FAILED_MESSAGE};
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn dataset() -> Dataset {
        Dataset {
            title: Some("Team Links".to_string()),
            description: Some("Everything we use".to_string()),
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
        }
    }

    #[test]
    fn draws_loaded_page() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = App::new(Config::default());
        dispatch(&mut app, Event::Loaded(Ok(dataset())));

        terminal.draw(|f| draw_ui(f, &mut app)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("Team Links"));
        assert!(text.contains("Everything we use"));
        assert!(text.contains("2 groups, 3 links"));
        assert!(text.contains(" all "));
        assert!(text.contains("Group A"));
        assert!(text.contains("Example Site"));
        assert!(text.contains("Group B"));
        assert_eq!(app.tag_hits.len(), 2);
    }

    #[test]
    fn draws_filtered_page_after_typing() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = App::new(Config::default());
        dispatch(&mut app, Event::Loaded(Ok(dataset())));
        for c in "x.dev".chars() {
            dispatch(
                &mut app,
                Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }

        terminal.draw(|f| draw_ui(f, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("1 groups, 1 links"));
        assert!(!text.contains("Group B"));
    }

    #[test]
    fn draws_error_in_place_of_stats() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut app = App::new(Config::default());
        let err = crate::bookmarks::DataSource::File("/nonexistent/navdeck.json".into())
            .load()
            .unwrap_err();
        dispatch(&mut app, Event::Loaded(Err(err)));

        terminal.draw(|f| draw_ui(f, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains(LOAD_FAILED_MESSAGE));
        assert!(!text.contains("groups,"));
    }

    #[test]
    fn draws_loading_state_before_data() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let mut app = App::new(Config::default());

        terminal.draw(|f| draw_ui(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("Loading"));
        assert!(app.tag_hits.is_empty());
    }
}
