//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.
//!
//! The event loop runs on a `LocalSet`: each ledger action is spawned as a
//! local task, so the screen keeps redrawing while requests are in flight.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::view::ViewBinder;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_key;
use super::surface::TuiSurface;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// Must be polled inside a `tokio::task::LocalSet`.
pub async fn run_tui(
    binder: Rc<ViewBinder<TuiSurface>>,
    endpoint: &str,
    tick_rate: Duration,
) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(binder, endpoint);

    let result = event_loop(&mut terminal, &mut app, tick_rate).await;

    restore_terminal()?;
    result
}

async fn event_loop(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut events = EventHandler::new(tick_rate);

    let binder = Rc::clone(&app.binder);
    tokio::task::spawn_local(async move {
        binder.start().await;
    });

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        let Some(event) = events.next().await else {
            tracing::warn!("Terminal event stream ended");
            break;
        };

        match event {
            Event::Key(key) => {
                if let Some(action) = handle_key(app, key) {
                    let binder = Rc::clone(&app.binder);
                    tokio::task::spawn_local(async move {
                        let outcome = binder.dispatch(action).await;
                        tracing::debug!(?action, ?outcome, "Action finished");
                    });
                }
            }
            Event::Resize(_, _) => {
                // Redrawn on the next pass
            }
            Event::Tick => {
                app.binder.notifier().tick(Instant::now());
            }
        }
    }

    Ok(())
}
