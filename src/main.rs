//! recstore - Removable Storage Record Store
//!
//! Terminal screen with three actions: save a profile record to a newly
//! picked document, find an existing document, and read the remembered one.
//! The picked location is remembered across restarts.

use std::io;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use recstore::application::{App, AppMode, RecordStore};
use recstore::TerminalApp;
use recstore::infrastructure::{init_tracing, Config, FileSettingsStore, FsDocumentProvider};
use recstore::presentation::{render_ui, InputHandler};

/// Entry point.
///
/// Resolves configuration, opens the settings store, sets up the terminal
/// and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the settings store cannot be opened or if terminal
/// setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::resolve();
    init_tracing(&config.log_path)?;

    let settings = FileSettingsStore::open(&config.settings_path)?;
    tracing::info!(settings = %settings.path().display(), "starting");
    let store = RecordStore::new(settings, FsDocumentProvider, config.initial_dir.clone());
    let mut app = App::new(store, &config.suggested_name);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal failure");
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// The screen resumes once before the first frame; the app resumes it again
/// whenever a picker dialog closes.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut TerminalApp) -> io::Result<()> {
    app.resume();
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
