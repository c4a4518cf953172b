//! HOUSEI TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use housei_core::EntityCatalog;
use housei_tui::config::TuiConfig;
use housei_tui::error::TuiError;
use housei_tui::events::TuiEvent;
use housei_tui::keys::map_key;
use housei_tui::logging;
use housei_tui::state::{App, InputFocus};
use housei_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(&config.log_path, config.log_filter.as_deref())?;

    let catalog = match &config.catalog_path {
        Some(path) => EntityCatalog::from_path(path, config.reference_policy)?,
        None => EntityCatalog::builtin(config.reference_policy)?,
    };
    tracing::info!(
        agents = catalog.agents().len(),
        dangling = catalog.dangling_references().len(),
        "Catalog loaded"
    );

    let (columns, _) = terminal::size()?;
    let mut app = App::new(config, catalog, columns);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    while !app.should_quit {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => handle_event(&mut app, event),
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

/// Forward terminal input on a blocking thread. Stops once the receiver is
/// gone.
fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if sender.is_closed() {
            break;
        }
        let Ok(true) = event::poll(Duration::from_millis(200)) else {
            continue;
        };
        let forwarded = match event::read() {
            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                sender.blocking_send(TuiEvent::Input(key))
            }
            Ok(CrosstermEvent::Resize(width, height)) => {
                sender.blocking_send(TuiEvent::Resize { width, height })
            }
            _ => Ok(()),
        };
        if forwarded.is_err() {
            break;
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent) {
    match event {
        TuiEvent::Input(key) => {
            if app.focus != InputFocus::None {
                app.handle_input_key(key);
            } else if let Some(action) = map_key(key) {
                app.apply(action);
            }
        }
        TuiEvent::Resize { width, .. } => app.on_resize(width),
        TuiEvent::Tick => app.on_tick(chrono::Utc::now()),
    }
}
