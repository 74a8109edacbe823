//! File loading and saving utilities for grid text files.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{
    codec,
    grid::{Grid, Tile},
    MazeError,
};

/// Default file the generator writes to and the solver reads from.
pub const DEFAULT_MAZE_FILE: &str = "maze.txt";

/// Reads a weight grid from a text file.
///
/// # Errors
///
/// This function may return errors if:
/// - The file cannot be read ([`MazeError::Io`])
/// - The contents are not a valid grid (see [`codec::decode_weights`])
pub fn read_weights(path: &Path) -> Result<Grid<u8>, MazeError> {
    let contents = fs::read_to_string(path)?;
    let grid = codec::decode_weights(&contents)?;

    debug!(
        "loaded {}x{} grid from {}",
        grid.height(),
        grid.width(),
        path.display()
    );

    Ok(grid)
}

/// Writes a carved maze to a text file, replacing any previous contents.
///
/// # Errors
///
/// This function returns [`MazeError::Io`] if the file cannot be written.
pub fn write_tiles(path: &Path, grid: &Grid<Tile>) -> Result<(), MazeError> {
    fs::write(path, codec::encode_tiles(grid))?;

    info!(
        "wrote {}x{} maze to {}",
        grid.height(),
        grid.width(),
        path.display()
    );

    Ok(())
}
