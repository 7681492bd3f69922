use rand::{Rng, rngs::StdRng};

use crate::{
    generators::get_rng,
    maze::{Direction, Grid},
};

/// The cell the walk always starts from: top-left corner of the interior.
pub const START: (usize, usize) = (1, 1);

/// A single removed wall, recorded in the order the walk removed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carve {
    /// The cell the walk was standing on.
    pub from: (usize, usize),
    /// The direction it stepped through the removed wall.
    pub direction: Direction,
}

/// Randomized depth-first search ("recursive backtracker") maze generator.
///
/// Owns its random source, so separate generators never share draw sequences.
pub struct Generator<R: Rng = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    /// Creates a generator backed by [`StdRng`], seeded with `seed` or from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Generator { rng: get_rng(seed) }
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Generator { rng }
    }

    /// Directions from `cell` whose neighbor has not been visited yet, in [`Direction::ALL`] order.
    fn unvisited_directions(grid: &Grid, cell: (usize, usize)) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| {
                // The sentinel ring is always visited, so an interior cell never probes past it
                let (row, col) = grid.neighbor(cell.0, cell.1, dir).unwrap_or_else(|| {
                    panic!("Walk reached {:?}, outside the sentinel ring", cell)
                });
                !grid.is_visited(row, col)
            })
            .collect()
    }

    /// Carves a perfect maze into `grid`, starting from the top-left interior cell.
    ///
    /// Walls are removed only when stepping into an unvisited cell, so the removed walls
    /// form a spanning tree over the interior.
    ///
    /// The walk keeps an explicit stack instead of recursing. Each time a cell is on top of
    /// the stack its unvisited neighbors are recomputed, exactly as a recursive walk would
    /// after returning from a child, so the sequence of random draws is the same.
    ///
    /// # Returns
    /// Every removed wall, in removal order.
    pub fn generate(&mut self, grid: &mut Grid) -> Vec<Carve> {
        let size = grid.size();
        tracing::debug!("[generator] Carving {}x{} maze", size, size);

        let mut carves = Vec::with_capacity(size * size - 1);
        grid.mark_visited(START.0, START.1);

        // The stack will keep only visited cells
        let mut stack = vec![START];

        while let Some(cell) = stack.pop() {
            let candidates = Self::unvisited_directions(grid, cell);
            if candidates.is_empty() {
                // Dead end, backtrack to the previous cell
                continue;
            }

            let direction = candidates[self.rng.random_range(0..candidates.len())];
            let next = grid.remove_wall_toward(cell.0, cell.1, direction);
            grid.mark_visited(next.0, next.1);
            tracing::trace!("[generator] {:?} -> {:?} ({})", cell, next, direction);
            carves.push(Carve {
                from: cell,
                direction,
            });

            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(next);
        }

        tracing::debug!("[generator] Done, removed {} walls", carves.len());
        carves
    }
}
