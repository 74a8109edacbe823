//! Perfect maze generation and weighted shortest-path solving over rectangular grids.
//!
//! The crate is split in two phases that share the [`grid::Grid`] storage type. The
//! [`carving`] module turns a checkerboard of walls into a perfect maze through randomized
//! depth-first search, and the [`pathfinding`] module runs a uniform-cost search over a weight
//! grid, marking the cheapest route between two cells. Around that core sit the text
//! [`codec`], the [`file_loader`], the [`render`] module for glyph and bitmap output, and the
//! command-line surface in [`config`] and [`commands`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use std::io;

use thiserror::Error;

use crate::grid::Coord;

mod app;
pub mod carving;
pub mod codec;
pub mod commands;
pub mod config;
mod events;
pub mod file_loader;
pub mod grid;
pub mod logging;
pub mod pathfinding;
pub mod render;
mod types;
mod ui;

/// Failure conditions raised by grid construction, search and the text format.
///
/// Each variant carries the offending coordinate, dimension or character so the caller can report
/// what went wrong without re-inspecting the input. The absence of a path between two cells is not
/// represented here, since the search reports it as an ordinary outcome.
#[derive(Debug, Error)]
pub enum MazeError {
    /// Grid dimensions that cannot hold a carvable maze.
    ///
    /// Raised when the height or width is even or zero.
    #[error("invalid grid dimension {height}x{width}: both sides must be odd and positive")]
    InvalidDimension {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
    /// A coordinate outside the grid extents.
    #[error("coordinate {coord} lies outside the {height}x{width} grid")]
    OutOfBounds {
        /// Offending coordinate.
        coord: Coord,
        /// Number of rows in the grid.
        height: usize,
        /// Number of columns in the grid.
        width: usize,
    },
    /// A search endpoint placed on an impassable cell.
    #[error("endpoint {coord} is not a traversable cell")]
    InvalidEndpoint {
        /// Offending start or end coordinate.
        coord: Coord,
    },
    /// Text input that holds no rows at all.
    #[error("grid text contains no rows")]
    EmptyGrid,
    /// A row whose length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character that is not a decimal digit.
    #[error("invalid character {character:?} at ({row}, {col})")]
    InvalidCharacter {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The character itself.
        character: char,
    },
    /// A coordinate string not of the form `row,col`.
    #[error("malformed coordinate {input:?}, expected `row,col`")]
    MalformedCoordinate {
        /// The rejected input.
        input: String,
    },
    /// A grid too large to address as an image.
    #[error("grid {height}x{width} is too large for a bitmap")]
    ImageTooLarge {
        /// Number of rows in the grid.
        height: usize,
        /// Number of columns in the grid.
        width: usize,
    },
    /// Reading or writing a grid file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Encoding or saving a bitmap failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
