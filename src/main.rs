use std::io;
use std::io::IsTerminal;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use navdeck::app::App;
use navdeck::args::{parse_args, Command, USAGE};
use navdeck::bookmarks::{import::import_file, DataSource};
use navdeck::config::Config;
use navdeck::event_loop::run_app;
use navdeck::logging;

fn main() -> Result<()> {
    let command = parse_args(std::env::args().skip(1).collect())?;

    if let Some(path) = logging::log_path() {
        // Logging is best-effort; the page works without it
        if let Err(e) = logging::init(&path) {
            eprintln!("navdeck: logging disabled: {e:#}");
        }
    }

    match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Version => {
            println!("navdeck {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Import { source, out } => {
            let (path, dataset) = import_file(&source, &out)?;
            println!(
                "Imported {} links into {}",
                dataset.link_count(),
                path.display()
            );
            Ok(())
        }
        Command::Run { data } => run(data),
    }
}

fn run(data: Option<std::path::PathBuf>) -> Result<()> {
    // Check if we're in a proper terminal
    if !io::stdin().is_terminal() {
        anyhow::bail!("navdeck must be run in an interactive terminal");
    }

    let config = Config::load().context("Failed to load config")?;
    let source = DataSource::from_env(data, config.data_path.clone());
    tracing::info!(%source, "starting navdeck");

    let mut app = App::new(config);
    app.start_loading(source);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode - are you in a terminal?")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal (always try to restore even on error)
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}
