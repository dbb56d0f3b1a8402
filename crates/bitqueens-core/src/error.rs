//! Error types for bitqueens

use thiserror::Error;

/// Main error type for bitqueens operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueensError {
    /// Board width is zero or does not fit in the column-mask type
    #[error("Invalid board width {width}: must be between 1 and {max}")]
    InvalidWidth { width: u32, max: u32 },

    /// Start column lies outside the board
    #[error("Invalid start column {column} for a board of width {width}")]
    InvalidColumn { column: u32, width: u32 },
}

/// Result type alias for bitqueens operations
pub type Result<T> = std::result::Result<T, QueensError>;
