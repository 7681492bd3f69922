use thiserror::Error;

/// Errors surfaced to callers of the maze library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The requested side length was zero or negative.
    #[error("maze size must be positive, got {0}")]
    InvalidSize(i64),
    /// The bordered grid would not fit in memory addressing.
    #[error("maze size {0} is too large")]
    TooLarge(u64),
}
