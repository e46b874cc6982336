//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;
use std::thread;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error};

use crate::config::settings::Settings;
use crate::export::{BufferRasterizer, PdfDocumentWriter};

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
///
/// Panics on the calling thread restore the terminal before the default
/// report. Panics on other threads are only logged; the UI keeps running.
pub fn init_terminal() -> Result<Tui> {
    let ui_thread = thread::current().id();
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if thread::current().id() == ui_thread {
            let _ = restore_terminal();
            original_hook(panic_info);
        } else {
            error!(panic = %panic_info, "background thread panicked");
        }
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
pub fn run_tui(settings: &Settings, export_dir: PathBuf) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, export_dir);
    let events = EventHandler::default();

    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        // The next draw shows the busy state while the worker waits out its
        // repaint delay.
        if let Some(job) = app.take_pending_export() {
            debug!(path = %job.path().display(), "spawning export worker");
            let sender = events.sender();
            job.spawn(BufferRasterizer, PdfDocumentWriter, move |result| {
                let _ = sender.send(Event::ExportFinished(result));
            });
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
