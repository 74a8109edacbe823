//! Grid storage and coordinate types.
//!
//! This module contains the rectangular [`Grid`] container shared by the carving and searching
//! phases, along with the [`Coord`] and [`Direction`] types used to walk it and the [`Tile`] enum
//! that describes a cell during carving.

use std::{fmt, str::FromStr};

use crate::MazeError;

/// Position of a cell inside a grid.
///
/// Coordinates are 0-based and ordered row-major, which gives the search frontier a stable total
/// order for cells of equal cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Builds a coordinate from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate `distance` cells away in the given direction.
    ///
    /// This function yields `None` when the step would leave the non-negative quadrant. It does
    /// not know about grid extents; callers check those against the grid they walk.
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let distance = isize::try_from(distance).ok()?;
        let (row_delta, col_delta) = direction.delta();

        Some(Self::new(
            self.row.checked_add_signed(row_delta.checked_mul(distance)?)?,
            self.col.checked_add_signed(col_delta.checked_mul(distance)?)?,
        ))
    }

    /// Returns the cell lying halfway between two coordinates.
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = MazeError;

    /// Parses the `row,col` form used on the command line.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || MazeError::MalformedCoordinate {
            input: input.to_owned(),
        };

        let (row, col) = input.split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse().map_err(|_err| malformed())?;
        let col = col.trim().parse().map_err(|_err| malformed())?;

        Ok(Self::new(row, col))
    }
}

/// Orthogonal direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards the last row.
    South,
    /// Towards the last column.
    East,
    /// Towards column 0.
    West,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the `(row, col)` offset of a single step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
        }
    }
}

/// State of a cell while a maze is being carved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    /// Solid cell that blocks movement.
    Wall,
    /// Cell that can be walked through.
    Open,
}

/// Rectangular, row-major grid of cells.
///
/// The grid owns its cells and is mutated in place by whichever algorithm runs on it. Every
/// accessor either checks bounds and reports [`MazeError::OutOfBounds`] or returns an [`Option`],
/// so no access can index outside the storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    /// Number of rows.
    height: usize,
    /// Number of columns.
    width: usize,
    /// Cells stored row after row.
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `init` once for every coordinate, in row-major order.
    pub fn from_fn<F>(height: usize, width: usize, mut init: F) -> Self
    where
        F: FnMut(Coord) -> T,
    {
        let mut cells = Vec::with_capacity(height.saturating_mul(width));
        for row in 0..height {
            for col in 0..width {
                cells.push(init(Coord::new(row, col)));
            }
        }

        Self {
            height,
            width,
            cells,
        }
    }

    /// Builds a grid from a list of equally long rows.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - There are no rows, or the first row is empty ([`MazeError::EmptyGrid`])
    /// - A row differs in length from the first one ([`MazeError::RaggedRow`])
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(height.saturating_mul(width));
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Returns the number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Checks whether a coordinate lies inside the grid.
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Translates a coordinate into an offset in the backing storage.
    const fn offset(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.width + coord.col)
        } else {
            None
        }
    }

    /// Builds the error reported for an access at `coord`.
    const fn out_of_bounds(&self, coord: Coord) -> MazeError {
        MazeError::OutOfBounds {
            coord,
            height: self.height,
            width: self.width,
        }
    }

    /// Returns the cell at `coord`, if it lies inside the grid.
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.cells.get(self.offset(coord)?)
    }

    /// Returns the cell at `coord` mutably, if it lies inside the grid.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        let offset = self.offset(coord)?;
        self.cells.get_mut(offset)
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::OutOfBounds`] when the coordinate lies outside
    /// `[0, height) x [0, width)`.
    pub fn at(&self, coord: Coord) -> Result<&T, MazeError> {
        self.get(coord).ok_or_else(|| self.out_of_bounds(coord))
    }

    /// Returns the cell at `coord` mutably.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::OutOfBounds`] when the coordinate lies outside
    /// `[0, height) x [0, width)`.
    pub fn at_mut(&mut self, coord: Coord) -> Result<&mut T, MazeError> {
        let error = self.out_of_bounds(coord);
        self.get_mut(coord).ok_or(error)
    }

    /// Iterates over the in-bounds orthogonal neighbors of a coordinate.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| coord.step(direction, 1))
            .filter(move |neighbor| self.contains(*neighbor))
    }

    /// Iterates over the rows of the grid as slices.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[T]> + ExactSizeIterator {
        self.cells.chunks(self.width.max(1))
    }

    /// Iterates over every cell together with its coordinate, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(offset, cell)| (Coord::new(offset / width, offset % width), cell))
    }

    /// Counts the cells matching a predicate.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).count()
    }

    /// Builds a grid of the same shape by transforming every cell.
    #[must_use]
    pub fn map<U, F>(&self, transform: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            height: self.height,
            width: self.width,
            cells: self.cells.iter().map(transform).collect(),
        }
    }
}

impl Grid<Tile> {
    /// Creates the pre-carve layout of a maze.
    ///
    /// Every cell on an even row or even column is a [`Tile::Wall`]; the remaining odd/odd cells
    /// are [`Tile::Open`] chambers, each surrounded by eight walls. Carving later opens some of the
    /// walls lying between two chambers.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::InvalidDimension`] if either dimension is even or zero.
    pub fn new_maze(height: usize, width: usize) -> Result<Self, MazeError> {
        if height % 2 == 0 || width % 2 == 0 {
            return Err(MazeError::InvalidDimension { height, width });
        }

        Ok(Self::from_fn(height, width, |coord| {
            if coord.row % 2 == 0 || coord.col % 2 == 0 {
                Tile::Wall
            } else {
                Tile::Open
            }
        }))
    }

    /// Converts the carved maze into the weight view consumed by the search.
    ///
    /// Walls become weight 0 and open cells weight 1.
    #[must_use]
    pub fn weights(&self) -> Grid<u8> {
        self.map(|tile| match tile {
            Tile::Wall => 0,
            Tile::Open => 1,
        })
    }
}
