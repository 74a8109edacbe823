//! Event handling functions for user input in the viewer.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::app::App;

/// Handles input events and updates the viewer state accordingly.
///
/// This function polls for keyboard events and dispatches key presses to [`handle_key`]. It uses
/// a timeout to avoid blocking the redraw loop.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Applies a single key press to the viewer state.
///
/// `q` and `Esc` quit, `s` toggles between the bare maze and the solution.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('s') => app.screen = app.screen.toggled(),
        _ => {}
    }
}
