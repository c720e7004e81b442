//! Error types for the recall engine.
//!
//! Every variant is a precondition violation detected eagerly at the start of
//! the offending operation. Failing to reach a fixed point within the
//! iteration budget is not an error.

/// Errors raised by codec, memory, noise and scoring operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecallError {
    /// A grid row does not have the same width as the first row.
    #[error("ragged grid: row {row} has width {actual}, expected {expected}")]
    Shape {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },

    /// A vector length does not match the memory dimension or its peer.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// A memory was requested with zero units.
    #[error("invalid dimension {0}: a memory needs at least one unit")]
    InvalidDimension(usize),

    /// A vector element other than +1 or -1.
    #[error("invalid spin {value} at index {index}: expected +1 or -1")]
    InvalidSpin {
        /// Position of the offending element.
        index: usize,
        /// The rejected value.
        value: i8,
    },

    /// A character in grid text that is neither `#` nor `.`.
    #[error("invalid cell symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The rejected character.
        symbol: char,
    },

    /// A grid with no rows or no columns.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A flip probability outside `[0, 1]`.
    #[error("flip probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecallError>;
