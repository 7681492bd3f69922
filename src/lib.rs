//! Perfect maze generation with a randomized depth-first search, rendered as text.

pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;

pub use config::{DEFAULT_SEED, MazeConfig};
pub use error::MazeError;
pub use generators::{Carve, Generator};
pub use maze::{CellFlags, Direction, Grid};

/// Builds a grid of `config.size` and carves a perfect maze into it.
///
/// # Errors
/// Fails before any generation work if the size is zero or too large.
pub fn generate_maze(config: &MazeConfig) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(config.size)?;
    let carves = Generator::new(config.seed).generate(&mut grid);
    tracing::info!(
        "Generated {}x{} maze with {} passages (seed: {:?})",
        config.size,
        config.size,
        carves.len(),
        config.seed
    );
    Ok(grid)
}
