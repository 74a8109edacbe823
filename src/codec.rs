//! Text format shared by the generator and the solver.
//!
//! A grid is stored as one line per row and one ASCII digit per cell, with no separators between
//! columns and a newline after every row. Carved mazes use `0` for walls and `1` for open cells;
//! weight grids use the digit as the weight of the cell.

use crate::{
    grid::{Grid, Tile},
    MazeError,
};

/// Encodes a carved maze, writing `0` for walls and `1` for open cells.
pub fn encode_tiles(grid: &Grid<Tile>) -> String {
    encode_with(grid, |tile| match tile {
        Tile::Wall => '0',
        Tile::Open => '1',
    })
}

/// Encodes a weight grid, one digit per cell.
///
/// Weights above 9 have no single-digit form and are written as `9`.
pub fn encode_weights(grid: &Grid<u8>) -> String {
    encode_with(grid, |weight| {
        char::from_digit(u32::from((*weight).min(9)), 10).unwrap_or('9')
    })
}

/// Writes every row of `grid` through `glyph`, terminating each row with a newline.
fn encode_with<T, F>(grid: &Grid<T>, mut glyph: F) -> String
where
    F: FnMut(&T) -> char,
{
    let mut text = String::with_capacity(grid.height() * (grid.width() + 1));
    for row in grid.rows() {
        text.extend(row.iter().map(&mut glyph));
        text.push('\n');
    }

    text
}

/// Decodes a weight grid from its text form.
///
/// Each digit `c` becomes a cell of weight `c - '0'`; the line and character positions give the
/// coordinates. Rows may end in `\n` or `\r\n` and the final newline is optional.
///
/// # Errors
///
/// This function may return errors if:
/// - The text holds no rows ([`MazeError::EmptyGrid`])
/// - A row differs in length from the first ([`MazeError::RaggedRow`])
/// - A character is not an ASCII digit ([`MazeError::InvalidCharacter`])
pub fn decode_weights(text: &str) -> Result<Grid<u8>, MazeError> {
    let rows = text
        .lines()
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, character)| {
                    character
                        .to_digit(10)
                        .and_then(|digit| u8::try_from(digit).ok())
                        .ok_or(MazeError::InvalidCharacter {
                            row,
                            col,
                            character,
                        })
                })
                .collect::<Result<Vec<u8>, MazeError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Grid::from_rows(rows)
}
