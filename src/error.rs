//! Error types for board construction and search setup.

use thiserror::Error;

/// Errors raised by board construction, board parsing, and search setup.
///
/// All of them are raised before any search step runs; the search loop
/// itself has no recoverable failure modes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NQueensError {
    /// Board size (and queen count) must be at least 1.
    #[error("invalid board size {0}: must be a positive number greater than 0")]
    InvalidSize(usize),

    /// Text could not be parsed as a square 0/1 board.
    #[error("malformed board: {0}")]
    MalformedBoard(String),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, NQueensError>;
