use thiserror::Error;

/// Errors raised while building or configuring a maze. Rejected moves and unreachable cells
/// are ordinary outcomes and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows} rows by {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        rows: usize,
        cols: usize,
    },
    #[error("obstacle probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}
