//! Randomized depth-first maze carving.
//!
//! This module turns the checkerboard produced by [`Grid::new_maze`] into a perfect maze. The
//! carver walks the chamber cells (odd row, odd column) with an explicit backtracking stack and
//! opens the wall between the current chamber and a randomly chosen unvisited one, so the opened
//! passages form a spanning tree of the chambers.

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom as _, Rng, SeedableRng as _};

use crate::{
    grid::{Coord, Direction, Grid, Tile},
    MazeError,
};

/// Cell where every carving run starts.
pub const CARVE_ORIGIN: Coord = Coord::new(1, 1);

/// Depth-first maze carver driven by an injected random generator.
///
/// The generator only decides the order in which directions are tried, so it affects the shape of
/// the maze but never its correctness. Seeding it makes runs reproducible.
#[derive(Debug)]
pub struct Carver<R> {
    /// Source of randomness for direction shuffling.
    rng: R,
}

impl Carver<StdRng> {
    /// Creates a carver whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a carver seeded from the operating system's entropy source.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Carver<R> {
    /// Wraps an existing random generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carves a perfect maze into a pre-initialized grid.
    ///
    /// Starting at [`CARVE_ORIGIN`], the carver repeatedly looks at the chamber on top of its
    /// stack, shuffles the four directions and takes the first one leading to an unvisited chamber
    /// two cells away inside the interior. The wall halfway there is opened and the new chamber is
    /// pushed. When no direction is viable the chamber is popped. The run ends once the stack is
    /// empty, at which point every chamber has been pushed exactly once.
    ///
    /// Grids smaller than 3x3 have no interior and are left untouched. The return value is the
    /// number of walls opened.
    ///
    /// # Errors
    ///
    /// This function may return [`MazeError::OutOfBounds`] if a carving step lands outside the
    /// grid. The interior check rules this out for any grid built by [`Grid::new_maze`].
    pub fn carve(&mut self, grid: &mut Grid<Tile>) -> Result<usize, MazeError> {
        let (height, width) = (grid.height(), grid.width());
        if height < 3 || width < 3 {
            debug!("skipping carve of degenerate {height}x{width} grid");
            return Ok(0);
        }

        debug!("carving {height}x{width} maze from {CARVE_ORIGIN}");

        let in_interior = |coord: Coord| {
            (1..=height - 2).contains(&coord.row) && (1..=width - 2).contains(&coord.col)
        };

        let mut visited = Grid::from_fn(height, width, |_| false);
        let mut stack = Vec::with_capacity((height / 2).saturating_mul(width / 2));
        let mut opened = 0;

        *visited.at_mut(CARVE_ORIGIN)? = true;
        stack.push(CARVE_ORIGIN);

        while let Some(&current) = stack.last() {
            let mut directions = Direction::ALL;
            directions.shuffle(&mut self.rng);

            let next = directions
                .into_iter()
                .filter_map(|direction| current.step(direction, 2))
                .find(|&candidate| {
                    in_interior(candidate) && visited.get(candidate) == Some(&false)
                });

            if let Some(next) = next {
                *grid.at_mut(current.midpoint(next))? = Tile::Open;
                *visited.at_mut(next)? = true;
                stack.push(next);
                opened += 1;
            } else {
                let _ = stack.pop();
            }
        }

        debug!("carved {opened} passages");

        Ok(opened)
    }
}

/// Creates and carves a maze of the given size in one step.
///
/// With a seed the result is reproducible; without one the carver draws from the operating
/// system's entropy source.
///
/// # Errors
///
/// This function returns [`MazeError::InvalidDimension`] if either dimension is even or zero.
pub fn generate(height: usize, width: usize, seed: Option<u64>) -> Result<Grid<Tile>, MazeError> {
    let mut grid = Grid::new_maze(height, width)?;
    let mut carver = seed.map_or_else(Carver::from_os_rng, Carver::seeded);
    let _ = carver.carve(&mut grid)?;

    Ok(grid)
}
