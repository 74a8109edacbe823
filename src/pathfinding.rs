//! Uniform-cost shortest-path search over weight grids.
//!
//! This module contains the [`PathFinder`], which runs Dijkstra's algorithm on a 4-connected grid
//! where entering a cell costs that cell's weight, marks the cheapest route in place and reports
//! its total cost.

use std::{cmp::Reverse, collections::BinaryHeap};

use log::{debug, info};

use crate::{
    grid::{Coord, Direction, Grid},
    MazeError,
};

/// Whether the start cell's own weight counts toward the path cost.
///
/// Moving onto a cell always costs its weight. The start cell is never moved onto, so by default
/// it contributes nothing; [`StartCost::Included`] adds it anyway, which makes the cost equal to
/// the sum of every weight on the path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartCost {
    /// The search starts at cost 0.
    #[default]
    Excluded,
    /// The search starts at the start cell's weight.
    Included,
}

/// Per-cell state of a search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCell {
    /// Cost of entering the cell, 0 when impassable.
    pub weight: u8,
    /// Accumulated cost from the start, set on discovery.
    pub cost: Option<u64>,
    /// Cell the search came from, set on discovery.
    pub predecessor: Option<Coord>,
    /// Whether the search has reached this cell.
    pub discovered: bool,
    /// Whether the cell lies on the reconstructed path.
    pub marked: bool,
}

impl SearchCell {
    /// Creates a fresh cell of the given weight.
    pub const fn new(weight: u8) -> Self {
        Self {
            weight,
            cost: None,
            predecessor: None,
            discovered: false,
            marked: false,
        }
    }

    /// Checks whether the search may enter this cell.
    pub const fn is_traversable(&self) -> bool {
        self.weight > 0
    }
}

/// Cheapest route found between two cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Total cost of the route under the chosen [`StartCost`] convention.
    pub cost: u64,
    /// Cells of the route, from the start to the end inclusive.
    pub path: Vec<Coord>,
}

/// Shortest-path solver owning the search state of one grid.
///
/// The solver copies the weights into a grid of [`SearchCell`]s on construction. After a call to
/// [`PathFinder::solve`], the cells hold the accumulated costs, backlinks and path marks of that
/// run, which is what the renderers consume.
#[derive(Clone, Debug)]
pub struct PathFinder {
    /// Search state of every cell.
    cells: Grid<SearchCell>,
    /// Convention applied to the start cell.
    start_cost: StartCost,
}

impl PathFinder {
    /// Builds a solver over a weight grid.
    pub fn new(weights: &Grid<u8>) -> Self {
        Self {
            cells: weights.map(|weight| SearchCell::new(*weight)),
            start_cost: StartCost::default(),
        }
    }

    /// Selects whether the start cell's weight counts toward the path cost.
    #[must_use]
    pub const fn with_start_cost(mut self, start_cost: StartCost) -> Self {
        self.start_cost = start_cost;
        self
    }

    /// Returns the search state of every cell.
    pub const fn cells(&self) -> &Grid<SearchCell> {
        &self.cells
    }

    /// Consumes the solver, returning the search state of every cell.
    pub fn into_cells(self) -> Grid<SearchCell> {
        self.cells
    }

    /// Finds and marks the cheapest route from `start` to `end`.
    ///
    /// The search pops the cheapest frontier cell from a min-heap and discovers each traversable,
    /// undiscovered neighbor at the popped cost plus the neighbor's weight. A cell's cost is fixed
    /// when it is first discovered and never relaxed again. Since the cost of an edge only depends
    /// on the cell it enters, the first discoverer is always the cheapest one, so the fixed costs
    /// are optimal. The search stops as soon as the end cell is popped.
    ///
    /// The route is then rebuilt by following the backlinks from the end to the start, marking
    /// every cell on the way. Any state from a previous run is cleared first.
    ///
    /// Returns `Ok(None)` when the end cannot be reached from the start; no cell is marked in that
    /// case.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - `start` or `end` lies outside the grid ([`MazeError::OutOfBounds`])
    /// - `start` or `end` is an impassable cell ([`MazeError::InvalidEndpoint`])
    pub fn solve(&mut self, start: Coord, end: Coord) -> Result<Option<Solution>, MazeError> {
        let start_weight = self.cells.at(start)?.weight;
        let end_weight = self.cells.at(end)?.weight;
        if start_weight == 0 {
            return Err(MazeError::InvalidEndpoint { coord: start });
        }
        if end_weight == 0 {
            return Err(MazeError::InvalidEndpoint { coord: end });
        }

        self.reset();

        let origin = match self.start_cost {
            StartCost::Excluded => 0,
            StartCost::Included => u64::from(start_weight),
        };
        let start_cell = self.cells.at_mut(start)?;
        start_cell.cost = Some(origin);
        start_cell.discovered = true;

        let mut frontier = BinaryHeap::from([Reverse((origin, start))]);
        let mut finalized = 0_usize;

        while let Some(Reverse((cost, current))) = frontier.pop() {
            finalized += 1;
            if current == end {
                break;
            }

            for direction in Direction::ALL {
                let Some(neighbor) = current.step(direction, 1) else {
                    continue;
                };
                let Some(cell) = self.cells.get_mut(neighbor) else {
                    continue;
                };
                if !cell.is_traversable() || cell.discovered {
                    continue;
                }

                let discovered_cost = cost + u64::from(cell.weight);
                cell.cost = Some(discovered_cost);
                cell.predecessor = Some(current);
                cell.discovered = true;
                frontier.push(Reverse((discovered_cost, neighbor)));
            }
        }

        debug!(
            "search from {start} to {end} finalized {finalized} cells, {} left in frontier",
            frontier.len()
        );

        let solution = self.reconstruct(start, end)?;
        if solution.is_none() {
            info!("no path between {start} and {end}");
        }

        Ok(solution)
    }

    /// Clears the search state left by a previous run.
    fn reset(&mut self) {
        self.cells = self.cells.map(|cell| SearchCell::new(cell.weight));
    }

    /// Walks the backlinks from `end` to `start`, marking the route.
    fn reconstruct(&mut self, start: Coord, end: Coord) -> Result<Option<Solution>, MazeError> {
        let Some(cost) = self.cells.at(end)?.cost else {
            return Ok(None);
        };

        let mut path = vec![end];
        let mut current = end;
        while current != start {
            if let Some(previous) = self.cells.at(current)?.predecessor {
                path.push(previous);
                current = previous;
            } else {
                return Ok(None);
            }
        }

        for coord in &path {
            self.cells.at_mut(*coord)?.marked = true;
        }
        path.reverse();

        Ok(Some(Solution { cost, path }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{carving, codec};

    /// Builds a weight grid from digit rows.
    fn weights(text: &str) -> Grid<u8> {
        codec::decode_weights(text).expect("test grid should decode")
    }

    /// Collects the marked coordinates in row-major order.
    fn marked(finder: &PathFinder) -> Vec<Coord> {
        finder
            .cells()
            .iter()
            .filter(|(_, cell)| cell.marked)
            .map(|(coord, _)| coord)
            .collect()
    }

    #[test]
    fn test_solve_corridor() {
        let grid = weights("00000\n01110\n00000\n");
        let mut finder = PathFinder::new(&grid);

        let solution = finder
            .solve(Coord::new(1, 1), Coord::new(1, 3))
            .expect("endpoints are valid")
            .expect("corridor is connected");

        assert_eq!(solution.cost, 2);
        assert_eq!(
            solution.path,
            vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 3)]
        );
        assert_eq!(marked(&finder), solution.path);
    }

    #[test]
    fn test_solve_avoids_heavy_cell() {
        let grid = weights("191\n111\n");
        let mut finder = PathFinder::new(&grid);

        let solution = finder
            .solve(Coord::new(0, 0), Coord::new(0, 2))
            .expect("endpoints are valid")
            .expect("grid is connected");

        assert_eq!(solution.cost, 4);
        assert_eq!(
            solution.path,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(0, 2),
            ]
        );
        assert!(!finder
            .cells()
            .at(Coord::new(0, 1))
            .expect("cell exists")
            .marked);
    }

    #[test]
    fn test_solve_cost_sums_weights() {
        let grid = weights("0000000\n0123450\n0000000\n");
        let mut finder = PathFinder::new(&grid);

        let excluded = finder
            .solve(Coord::new(1, 1), Coord::new(1, 5))
            .expect("endpoints are valid")
            .expect("corridor is connected");
        assert_eq!(excluded.cost, 2 + 3 + 4 + 5);

        let mut finder = finder.with_start_cost(StartCost::Included);
        let included = finder
            .solve(Coord::new(1, 1), Coord::new(1, 5))
            .expect("endpoints are valid")
            .expect("corridor is connected");
        assert_eq!(included.cost, 1 + 2 + 3 + 4 + 5);
        assert_eq!(included.path, excluded.path);
    }

    #[test]
    fn test_solve_disconnected_returns_none() {
        let grid = weights("00000\n01010\n00000\n");
        let mut finder = PathFinder::new(&grid);

        let result = finder
            .solve(Coord::new(1, 1), Coord::new(1, 3))
            .expect("endpoints are valid");

        assert!(result.is_none());
        assert!(marked(&finder).is_empty());
    }

    #[test]
    fn test_solve_out_of_bounds() {
        let grid = weights("111\n111\n");
        let mut finder = PathFinder::new(&grid);

        assert!(matches!(
            finder.solve(Coord::new(2, 0), Coord::new(0, 0)),
            Err(MazeError::OutOfBounds { coord, .. }) if coord == Coord::new(2, 0)
        ));
        assert!(matches!(
            finder.solve(Coord::new(0, 0), Coord::new(0, 3)),
            Err(MazeError::OutOfBounds { coord, .. }) if coord == Coord::new(0, 3)
        ));
    }

    #[test]
    fn test_solve_wall_endpoint() {
        let grid = weights("101\n111\n");
        let mut finder = PathFinder::new(&grid);

        assert!(matches!(
            finder.solve(Coord::new(0, 1), Coord::new(1, 1)),
            Err(MazeError::InvalidEndpoint { coord }) if coord == Coord::new(0, 1)
        ));
        assert!(matches!(
            finder.solve(Coord::new(1, 1), Coord::new(0, 1)),
            Err(MazeError::InvalidEndpoint { coord }) if coord == Coord::new(0, 1)
        ));
    }

    #[test]
    fn test_solve_start_equals_end() {
        let grid = weights("3\n");
        let mut finder = PathFinder::new(&grid);

        let solution = finder
            .solve(Coord::new(0, 0), Coord::new(0, 0))
            .expect("endpoint is valid")
            .expect("a cell reaches itself");
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.path, vec![Coord::new(0, 0)]);

        let mut finder = finder.with_start_cost(StartCost::Included);
        let solution = finder
            .solve(Coord::new(0, 0), Coord::new(0, 0))
            .expect("endpoint is valid")
            .expect("a cell reaches itself");
        assert_eq!(solution.cost, 3);
    }

    #[test]
    fn test_solve_resets_previous_run() {
        let grid = weights("11111\n");
        let mut finder = PathFinder::new(&grid);

        let _ = finder
            .solve(Coord::new(0, 0), Coord::new(0, 4))
            .expect("endpoints are valid");
        let second = finder
            .solve(Coord::new(0, 1), Coord::new(0, 2))
            .expect("endpoints are valid")
            .expect("cells are adjacent");

        assert_eq!(second.cost, 1);
        assert_eq!(marked(&finder), vec![Coord::new(0, 1), Coord::new(0, 2)]);
    }

    #[test]
    fn test_solve_along_grid_border() {
        let grid = weights("111\n191\n111\n");
        let mut finder = PathFinder::new(&grid);

        let solution = finder
            .solve(Coord::new(0, 0), Coord::new(2, 2))
            .expect("corners are inside the grid")
            .expect("border ring is connected");

        assert_eq!(solution.cost, 4, "the ring avoids the heavy center");
        assert_eq!(solution.path.len(), 5);
        assert!(
            !marked(&finder).contains(&Coord::new(1, 1)),
            "center cell is never on the path"
        );
        assert_eq!(finder.cells().height(), 3);
        assert_eq!(finder.cells().width(), 3);
    }

    #[test]
    fn test_solve_carved_maze_marks_unique_path() {
        let maze = carving::generate(21, 31, Some(99)).expect("dimensions are odd");
        let mut finder = PathFinder::new(&maze.weights());
        let end = Coord::new(19, 29);

        let solution = finder
            .solve(Coord::new(1, 1), end)
            .expect("endpoints are open")
            .expect("a perfect maze is connected");

        let path_len = u64::try_from(solution.path.len()).expect("path length fits");
        assert_eq!(solution.cost, path_len - 1);
        assert_eq!(solution.path.first(), Some(&Coord::new(1, 1)));
        assert_eq!(solution.path.last(), Some(&end));
        for pair in solution.path.windows(2) {
            if let [from, to] = pair {
                assert_eq!(
                    from.row.abs_diff(to.row) + from.col.abs_diff(to.col),
                    1,
                    "path must move one orthogonal step at a time"
                );
            }
        }

        let mut sorted = solution.path.clone();
        sorted.sort();
        assert_eq!(marked(&finder), sorted);
    }

    #[test]
    fn test_five_by_five_regression() {
        for seed in 0..16 {
            let maze = carving::generate(5, 5, Some(seed)).expect("dimensions are odd");

            let mut excluded = PathFinder::new(&maze.weights());
            let solution = excluded
                .solve(Coord::new(1, 1), Coord::new(3, 3))
                .expect("endpoints are chambers")
                .expect("a perfect maze is connected");
            assert_eq!(solution.cost, 4, "seed {seed}");
            assert_eq!(solution.path.len(), 5, "seed {seed}");
            assert_eq!(marked(&excluded).len(), 5, "seed {seed}");

            let mut included =
                PathFinder::new(&maze.weights()).with_start_cost(StartCost::Included);
            let solution = included
                .solve(Coord::new(1, 1), Coord::new(3, 3))
                .expect("endpoints are chambers")
                .expect("a perfect maze is connected");
            assert_eq!(solution.cost, 5, "seed {seed}");
        }
    }
}
