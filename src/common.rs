//! Common types for fleet layout: board errors.

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Board side must be at least one cell, and its area must fit in `usize`.
    InvalidSize { size: usize },
    /// Row or column index is out of bounds [0..size).
    OutOfBounds { row: usize, col: usize },
    /// Ship length is zero or longer than the board side.
    InvalidShipLength { length: usize, size: usize },
    /// No free position was found within the attempt cap.
    PlacementExhausted { length: usize, attempts: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidSize { size } => write!(
                f,
                "Invalid board size {}: must be at least 1 with an addressable area",
                size
            ),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell out of bounds: row={}, col={}", row, col)
            }
            BoardError::InvalidShipLength { length, size } => write!(
                f,
                "Invalid ship length {} for a {}x{} board",
                length, size, size
            ),
            BoardError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
