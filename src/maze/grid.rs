use std::fmt;

use crate::error::MazeError;

use super::cell::{CellFlags, Direction};

/// Square cell array holding an `size × size` maze inside a one-cell sentinel ring.
///
/// The ring is marked visited so a walk never steps out of the interior. Its top row and
/// left column also carry walls, which draw the outer frame when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[CellFlags]>,
    /// Logical maze side length, excluding the ring.
    size: usize,
    /// Side length of the stored array, `size + 2`.
    length: usize,
}

impl Grid {
    /// Creates a grid with every interior wall standing and the sentinel ring in place.
    ///
    /// # Errors
    /// * [`MazeError::InvalidSize`] if `size` is zero
    /// * [`MazeError::TooLarge`] if the bordered array cannot be addressed
    pub fn new(size: usize) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::InvalidSize(0));
        }
        let length = size.checked_add(2).ok_or(MazeError::TooLarge(size as u64))?;
        let cells = length
            .checked_mul(length)
            .ok_or(MazeError::TooLarge(size as u64))?;

        let mut grid = Grid {
            data: vec![CellFlags::empty(); cells].into_boxed_slice(),
            size,
            length,
        };

        let last = length - 1;
        for i in 1..last {
            grid[(0, i)] = CellFlags::WALL_DOWN | CellFlags::VISITED;
            grid[(i, 0)] = CellFlags::WALL_RIGHT | CellFlags::VISITED;
            grid[(last, i)] = CellFlags::VISITED;
            grid[(i, last)] = CellFlags::VISITED;
            for j in 1..last {
                grid[(i, j)] = CellFlags::CLOSED;
            }
        }
        for corner in [(0, 0), (0, last), (last, 0), (last, last)] {
            grid[corner] = CellFlags::VISITED;
        }

        tracing::debug!("[grid] Created {}x{} grid", size, size);
        Ok(grid)
    }

    /// Returns the logical side length of the maze.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the side length of the stored array, ring included.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.length - 1 || col == self.length - 1
    }

    fn ravel_index(&self, row: usize, col: usize) -> usize {
        if row >= self.length || col >= self.length {
            panic!(
                "Coordinate ({}, {}) is outside the {}x{} grid",
                row, col, self.length, self.length
            );
        }
        row * self.length + col
    }

    /// Returns the raw flags of a cell.
    pub fn cell(&self, row: usize, col: usize) -> CellFlags {
        self[(row, col)]
    }

    pub fn is_visited(&self, row: usize, col: usize) -> bool {
        self[(row, col)].contains(CellFlags::VISITED)
    }

    pub fn mark_visited(&mut self, row: usize, col: usize) {
        self[(row, col)].insert(CellFlags::VISITED);
    }

    /// Returns the coordinate one step away in `direction`, or `None` if it falls off the array.
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let nr = row.checked_add_signed(dr)?;
        let nc = col.checked_add_signed(dc)?;
        (nr < self.length && nc < self.length).then_some((nr, nc))
    }

    fn expect_neighbor(&self, row: usize, col: usize, direction: Direction) -> (usize, usize) {
        self.neighbor(row, col, direction).unwrap_or_else(|| {
            panic!(
                "No neighbor {} of ({}, {}) in the {}x{} grid",
                direction, row, col, self.length, self.length
            )
        })
    }

    /// Returns which cell owns the wall between `(row, col)` and its neighbor in `direction`,
    /// the flag representing it, and the neighbor itself.
    fn wall_owner(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> ((usize, usize), CellFlags, (usize, usize)) {
        let neighbor = self.expect_neighbor(row, col, direction);
        match direction {
            Direction::Up => (neighbor, CellFlags::WALL_DOWN, neighbor),
            Direction::Right => ((row, col), CellFlags::WALL_RIGHT, neighbor),
            Direction::Down => ((row, col), CellFlags::WALL_DOWN, neighbor),
            Direction::Left => (neighbor, CellFlags::WALL_RIGHT, neighbor),
        }
    }

    /// Removes the wall between `(row, col)` and its neighbor in `direction`.
    ///
    /// # Returns
    /// The coordinate of the neighbor on the other side of the removed wall.
    ///
    /// # Panics
    /// If the neighbor lies outside the array.
    pub fn remove_wall_toward(
        &mut self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> (usize, usize) {
        let (owner, wall, neighbor) = self.wall_owner(row, col, direction);
        self[owner].remove(wall);
        neighbor
    }

    /// Checks whether the wall between `(row, col)` and its neighbor in `direction` stands.
    ///
    /// # Panics
    /// If the neighbor lies outside the array.
    pub fn has_wall(&self, row: usize, col: usize, direction: Direction) -> bool {
        let (owner, wall, _) = self.wall_owner(row, col, direction);
        self[owner].contains(wall)
    }

    /// Renders the maze as text, one line per row.
    ///
    /// Rows and columns `0..=size` are drawn: the top and left ring cells supply the outer
    /// frame, while the bottom and right ring cells are never drawn. The bottom and right
    /// edges of the maze come from the walls owned by the last interior row and column.
    pub fn render(&self) -> String {
        let drawn = self.length - 1;
        let mut out = String::with_capacity(drawn * (drawn * CellFlags::CELL_WIDTH + 1));
        for row in 0..drawn {
            for col in 0..drawn {
                out.extend(self[(row, col)].glyphs());
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = CellFlags;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_size() {
        assert_eq!(Grid::new(0), Err(MazeError::InvalidSize(0)));
    }

    #[test]
    fn test_rejects_overflowing_size() {
        assert_eq!(Grid::new(usize::MAX), Err(MazeError::TooLarge(usize::MAX as u64)));
        assert_eq!(
            Grid::new(usize::MAX / 2),
            Err(MazeError::TooLarge((usize::MAX / 2) as u64))
        );
    }

    #[test]
    fn test_initial_layout() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.length(), 5);

        for i in 1..4 {
            assert_eq!(grid.cell(0, i), CellFlags::WALL_DOWN | CellFlags::VISITED);
            assert_eq!(grid.cell(i, 0), CellFlags::WALL_RIGHT | CellFlags::VISITED);
            assert_eq!(grid.cell(4, i), CellFlags::VISITED);
            assert_eq!(grid.cell(i, 4), CellFlags::VISITED);
            for j in 1..4 {
                assert_eq!(grid.cell(i, j), CellFlags::CLOSED);
                assert!(!grid.is_visited(i, j));
            }
        }
        for (row, col) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(grid.cell(row, col), CellFlags::VISITED);
        }
    }

    #[test]
    fn test_boundary() {
        let grid = Grid::new(2).unwrap();
        assert!(grid.is_boundary(0, 2));
        assert!(grid.is_boundary(3, 1));
        assert!(grid.is_boundary(1, 3));
        assert!(!grid.is_boundary(1, 1));
        assert!(!grid.is_boundary(2, 2));
    }

    #[test]
    fn test_mark_visited_is_idempotent() {
        let mut grid = Grid::new(2).unwrap();
        grid.mark_visited(1, 2);
        grid.mark_visited(1, 2);
        assert!(grid.is_visited(1, 2));
        assert_eq!(grid.cell(1, 2), CellFlags::CLOSED | CellFlags::VISITED);
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 grid")]
    fn test_out_of_bounds_read_panics() {
        let grid = Grid::new(2).unwrap();
        grid.is_visited(4, 1);
    }

    #[test]
    fn test_neighbor() {
        let grid = Grid::new(2).unwrap();
        assert_eq!(grid.neighbor(1, 1, Direction::Up), Some((0, 1)));
        assert_eq!(grid.neighbor(1, 1, Direction::Left), Some((1, 0)));
        assert_eq!(grid.neighbor(0, 1, Direction::Up), None);
        assert_eq!(grid.neighbor(2, 3, Direction::Right), None);
    }

    #[test]
    fn test_remove_wall_uses_owning_cell() {
        let mut grid = Grid::new(3).unwrap();

        assert_eq!(grid.remove_wall_toward(2, 2, Direction::Up), (1, 2));
        assert!(!grid.cell(1, 2).contains(CellFlags::WALL_DOWN));
        assert_eq!(grid.cell(2, 2), CellFlags::CLOSED);

        assert_eq!(grid.remove_wall_toward(2, 2, Direction::Left), (2, 1));
        assert!(!grid.cell(2, 1).contains(CellFlags::WALL_RIGHT));
        assert_eq!(grid.cell(2, 2), CellFlags::CLOSED);

        assert_eq!(grid.remove_wall_toward(2, 2, Direction::Right), (2, 3));
        assert_eq!(grid.remove_wall_toward(2, 2, Direction::Down), (3, 2));
        assert_eq!(grid.cell(2, 2), CellFlags::empty());
    }

    #[test]
    fn test_has_wall_is_symmetric() {
        let mut grid = Grid::new(3).unwrap();
        grid.remove_wall_toward(1, 1, Direction::Down);
        for (row, col) in [(1, 1), (2, 1), (2, 2)] {
            for dir in Direction::ALL {
                let (nr, nc) = grid.neighbor(row, col, dir).unwrap();
                assert_eq!(
                    grid.has_wall(row, col, dir),
                    grid.has_wall(nr, nc, dir.opposite())
                );
            }
        }
        assert!(!grid.has_wall(1, 1, Direction::Down));
        assert!(!grid.has_wall(2, 1, Direction::Up));
        assert!(grid.has_wall(1, 1, Direction::Right));
    }

    #[test]
    #[should_panic(expected = "No neighbor up of (0, 1)")]
    fn test_remove_wall_off_grid_panics() {
        let mut grid = Grid::new(2).unwrap();
        grid.remove_wall_toward(0, 1, Direction::Up);
    }

    #[test]
    fn test_render_closed_grid() {
        let grid = Grid::new(2).unwrap();
        assert_eq!(grid.render(), " ._._.\n |_|_|\n |_|_|\n");
        assert_eq!(grid.to_string(), grid.render());
    }
}
