pub mod cell;
pub mod grid;

pub use cell::{CellFlags, Direction};
pub use grid::Grid;
