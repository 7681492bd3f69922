use clap::Parser;

use crate::error::MazeError;

/// Seed used when none is given, so mazes are deterministic by default.
pub const DEFAULT_SEED: u64 = 42;

/// Settings for a single maze generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Logical side length of the maze.
    pub size: usize,
    /// Seed for the random source. `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub fn new(size: usize) -> Self {
        MazeConfig {
            size,
            seed: Some(DEFAULT_SEED),
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate a perfect maze and print it as text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze side length, in cells
    #[arg(allow_negative_numbers = true)]
    pub size: i64,

    /// Random seed
    #[arg(default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Seed from OS entropy instead, ignoring the seed argument
    #[arg(long)]
    pub random: bool,
}

impl TryFrom<Args> for MazeConfig {
    type Error = MazeError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.size <= 0 {
            return Err(MazeError::InvalidSize(args.size));
        }
        let size =
            usize::try_from(args.size).map_err(|_| MazeError::TooLarge(args.size as u64))?;
        let seed = (!args.random).then_some(args.seed);
        Ok(MazeConfig::new(size).with_seed(seed))
    }
}
