//! Glyph and bitmap rendering of solved grids.
//!
//! Rendering is purely presentational: it reads the weights and path marks left by
//! [`PathFinder::solve`](crate::pathfinding::PathFinder::solve) and never changes them.

use std::{
    io::{Seek, Write},
    num::TryFromIntError,
    path::Path,
};

use image::{ImageFormat, RgbImage};
use log::info;

use crate::{
    grid::{Coord, Grid},
    pathfinding::SearchCell,
    MazeError,
};

/// Start and end cells of a search, drawn with their own color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Cell the search started from.
    pub start: Coord,
    /// Cell the search aimed for.
    pub end: Coord,
}

impl Endpoints {
    /// Checks whether `coord` is one of the two endpoints.
    pub fn contains(&self, coord: Coord) -> bool {
        coord == self.start || coord == self.end
    }
}

/// Which picture of the grid to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// The bare maze, path cells drawn as plain open cells.
    Maze,
    /// The maze with the path highlighted.
    Solution,
}

/// 24-bit color of a rendered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Color of impassable cells.
    pub const WALL: Self = Self::new(0, 0, 0);
    /// Color of traversable cells off the path.
    pub const OPEN: Self = Self::new(255, 255, 255);
    /// Color of cells on the path.
    pub const PATH: Self = Self::new(255, 0, 0);
    /// Color of the start and end cells.
    pub const ENDPOINT: Self = Self::new(0, 255, 0);

    /// Builds a color from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Picks the color of a single cell.
pub fn cell_color(coord: Coord, cell: &SearchCell, endpoints: Endpoints, layer: Layer) -> Rgb {
    if endpoints.contains(coord) {
        Rgb::ENDPOINT
    } else if cell.marked && layer == Layer::Solution {
        Rgb::PATH
    } else if cell.is_traversable() {
        Rgb::OPEN
    } else {
        Rgb::WALL
    }
}

/// Renders the grid as ASCII glyphs, one line per row.
///
/// Walls are `#`, open cells a space, path cells `o`, and the endpoints `S` and `E`.
pub fn glyphs(cells: &Grid<SearchCell>, endpoints: Endpoints) -> String {
    let mut text = String::with_capacity(cells.height() * (cells.width() + 1));
    for (coord, cell) in cells.iter() {
        let glyph = if coord == endpoints.start {
            'S'
        } else if coord == endpoints.end {
            'E'
        } else if cell.marked {
            'o'
        } else if cell.is_traversable() {
            ' '
        } else {
            '#'
        };
        text.push(glyph);

        if coord.col + 1 == cells.width() {
            text.push('\n');
        }
    }

    text
}

/// Builds the RGB image of the grid, one pixel per cell.
///
/// # Errors
///
/// This function returns [`MazeError::ImageTooLarge`] if a dimension does not fit in the 32-bit
/// image extents.
pub fn bitmap(
    cells: &Grid<SearchCell>,
    endpoints: Endpoints,
    layer: Layer,
) -> Result<RgbImage, MazeError> {
    let too_large = |_err: TryFromIntError| MazeError::ImageTooLarge {
        height: cells.height(),
        width: cells.width(),
    };
    let mut buffer = RgbImage::new(
        u32::try_from(cells.width()).map_err(too_large)?,
        u32::try_from(cells.height()).map_err(too_large)?,
    );

    for (coord, cell) in cells.iter() {
        let color = cell_color(coord, cell, endpoints, layer);
        buffer.put_pixel(
            u32::try_from(coord.col).map_err(too_large)?,
            u32::try_from(coord.row).map_err(too_large)?,
            image::Rgb([color.red, color.green, color.blue]),
        );
    }

    Ok(buffer)
}

/// Encodes the grid as a BMP image into `writer`.
///
/// # Errors
///
/// This function returns [`MazeError::ImageTooLarge`] for grids beyond the image extents and
/// [`MazeError::Image`] if encoding or writing fails.
pub fn write_bitmap<W: Write + Seek>(
    writer: &mut W,
    cells: &Grid<SearchCell>,
    endpoints: Endpoints,
    layer: Layer,
) -> Result<(), MazeError> {
    bitmap(cells, endpoints, layer)?.write_to(writer, ImageFormat::Bmp)?;

    Ok(())
}

/// Saves the bare maze and the highlighted solution as two bitmap files.
///
/// # Errors
///
/// This function returns [`MazeError::Image`] if either file cannot be encoded or written.
pub fn save_bitmaps(
    maze_path: &Path,
    solution_path: &Path,
    cells: &Grid<SearchCell>,
    endpoints: Endpoints,
) -> Result<(), MazeError> {
    for (path, layer) in [(maze_path, Layer::Maze), (solution_path, Layer::Solution)] {
        bitmap(cells, endpoints, layer)?.save_with_format(path, ImageFormat::Bmp)?;

        info!("wrote {layer:?} bitmap to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::{codec, pathfinding::PathFinder};

    /// Solves a small corridor with a side pocket and returns its cells and endpoints.
    fn solved_corridor() -> (Grid<SearchCell>, Endpoints) {
        let weights =
            codec::decode_weights("00000\n01110\n00010\n").expect("test grid should decode");
        let endpoints = Endpoints {
            start: Coord::new(1, 1),
            end: Coord::new(1, 3),
        };
        let mut finder = PathFinder::new(&weights);
        let _ = finder
            .solve(endpoints.start, endpoints.end)
            .expect("endpoints are valid");

        (finder.into_cells(), endpoints)
    }

    #[test]
    fn test_glyphs() {
        let (cells, endpoints) = solved_corridor();

        assert_eq!(glyphs(&cells, endpoints), "#####\n#SoE#\n### #\n");
    }

    #[test]
    fn test_cell_color_per_layer() {
        let (cells, endpoints) = solved_corridor();
        let path_cell = cells.at(Coord::new(1, 2)).expect("cell exists");

        assert_eq!(
            cell_color(Coord::new(1, 2), path_cell, endpoints, Layer::Solution),
            Rgb::PATH
        );
        assert_eq!(
            cell_color(Coord::new(1, 2), path_cell, endpoints, Layer::Maze),
            Rgb::OPEN
        );
        assert_eq!(
            cell_color(endpoints.start, path_cell, endpoints, Layer::Maze),
            Rgb::ENDPOINT
        );
    }

    #[test]
    fn test_write_bitmap_decodes_to_cell_colors() {
        let (cells, endpoints) = solved_corridor();
        let mut bytes = Cursor::new(Vec::new());

        write_bitmap(&mut bytes, &cells, endpoints, Layer::Solution)
            .expect("writing to memory should succeed");

        let decoded = image::load_from_memory_with_format(bytes.get_ref(), ImageFormat::Bmp)
            .expect("bitmap should decode")
            .to_rgb8();
        assert_eq!(decoded.dimensions(), (5, 3), "one pixel per cell");
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0], "corner is a wall");
        assert_eq!(decoded.get_pixel(1, 1).0, [0, 255, 0], "start is an endpoint");
        assert_eq!(decoded.get_pixel(2, 1).0, [255, 0, 0], "middle cell is on the path");
        assert_eq!(decoded.get_pixel(3, 2).0, [255, 255, 255], "pocket is open");
    }

    #[test]
    fn test_save_bitmaps_writes_both_files() {
        let (cells, endpoints) = solved_corridor();
        let dir = TempDir::new().expect("temp dir should be creatable");
        let maze_path = dir.path().join("maze.bmp");
        let solution_path = dir.path().join("maze_solution.bmp");

        save_bitmaps(&maze_path, &solution_path, &cells, endpoints)
            .expect("scratch files should be writable");

        let maze = image::open(&maze_path)
            .expect("maze bitmap should decode")
            .to_rgb8();
        let solution = image::open(&solution_path)
            .expect("solution bitmap should decode")
            .to_rgb8();
        assert_eq!(maze.get_pixel(2, 1).0, [255, 255, 255], "bare maze hides the path");
        assert_eq!(solution.get_pixel(2, 1).0, [255, 0, 0], "solution shows the path");
    }
}
