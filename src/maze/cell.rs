use bitflags::bitflags;

use std::fmt;

bitflags! {
    /// State of a single grid cell.
    ///
    /// A cell only owns the wall below it and the wall to its right. The wall above a cell
    /// belongs to the cell above, and the wall to its left belongs to the cell on the left.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const WALL_DOWN = 0b001;
        const WALL_RIGHT = 0b010;
        const VISITED = 0b100;
    }
}

impl CellFlags {
    /// An interior cell before generation: both owned walls standing, not yet visited.
    pub const CLOSED: CellFlags = CellFlags::WALL_DOWN.union(CellFlags::WALL_RIGHT);
    /// The width of each cell when rendered, in characters.
    pub const CELL_WIDTH: usize = 2;

    /// The two characters this cell renders as.
    pub fn glyphs(self) -> [char; 2] {
        [
            if self.contains(CellFlags::WALL_DOWN) { '_' } else { ' ' },
            if self.contains(CellFlags::WALL_RIGHT) { '|' } else { '.' },
        ]
    }
}

/// A compass step from one cell to an adjacent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Candidate order used by the generator. Changing it changes which direction a given
    /// random draw selects, so seeded mazes depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row and column offset of the neighbor in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
        }
    }
}
