//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent inputs the exercises cannot handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("magic square order must be at least 1")]
    EmptyOrder,

    #[error("siamese method needs an odd order, got {0}")]
    EvenOrder(usize),

    #[error("grid has no rows")]
    EmptyGrid,

    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("a row, column or diagonal sum does not fit in a 64-bit integer")]
    SumOverflow,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
