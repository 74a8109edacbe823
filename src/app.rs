//! Core state and main loop of the maze viewer.

use std::io;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, grid::Grid, pathfinding::SearchCell, render::Endpoints, types::Screen, ui};

/// Application state container for the maze viewer.
///
/// This structure holds the state of the viewer, which is to say the structure from which Ratatui
/// renders the solved maze and to which Crossterm events write.
pub(crate) struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the viewer should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Search state of the solved maze.
    ///
    /// This field holds the weights and path marks left by the search, which is everything the
    /// canvas needs to draw walls and the solution.
    pub(crate) cells: Grid<SearchCell>,
    /// Start and end cells of the search.
    pub(crate) endpoints: Endpoints,
    /// Cost of the solution, `None` when no path exists.
    pub(crate) cost: Option<u64>,
}

impl App {
    /// Creates a viewer over a solved maze, starting on the solution screen.
    pub(crate) const fn new(
        cells: Grid<SearchCell>,
        endpoints: Endpoints,
        cost: Option<u64>,
    ) -> Self {
        Self {
            exit: false,
            screen: Screen::Solution,
            cells,
            endpoints,
            cost,
        }
    }

    /// Runs the main loop of the viewer.
    ///
    /// This function handles user input and redraws the maze. The loop continues until the exit
    /// condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
