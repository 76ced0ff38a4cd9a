// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks, background messages)
// - Rendering the events card

pub mod app;
pub mod components;
pub mod feedback;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::catalog::Catalog;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::{Interactive, Scrollable};

/// Messages from background tasks to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMessage {
    /// The "Copied!" window for `generation` has elapsed
    FeedbackExpired { generation: u64 },
}

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::with_config(
        &config,
        Catalog::builtin(),
        // Kept open for the whole session so X11/Wayland can serve the paste
        Box::new(SystemClipboard::for_session()),
        log_buffer,
        tx,
    );
    tracing::info!("Press c to copy {} events", app.card.catalog().len());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    // No reset may fire once the UI is gone
    app.shutdown();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (toast expiry, periodic redraw)
/// 3. Messages from background tasks (feedback reset)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<UiMessage>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(message) = rx.recv() => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → Card
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Terminals that report releases would otherwise copy twice
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    app.card.handle_key(key_event);
}

/// Keys that act regardless of focus; returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('c') | KeyCode::Char('y') | KeyCode::Enter => {
            // Failure is already logged and toasted
            let _ = app.copy_events();
        }
        KeyCode::Char('t') => app.cycle_theme(),
        _ => return false,
    }
    true
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.card.scroll_up(),
        MouseEventKind::ScrollDown => app.card.scroll_down(),
        MouseEventKind::ScrollLeft => app.card.scroll_left(),
        MouseEventKind::ScrollRight => app.card.scroll_right(),
        MouseEventKind::Down(MouseButton::Left) => {
            if app.card.button_hit(mouse_event.column, mouse_event.row) {
                let _ = app.copy_events();
            }
        }
        _ => {}
    }
}
