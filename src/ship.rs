//! Ship spans: orientation and the run of cells one ship covers.

use core::fmt;

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Runs right, increasing column.
    Horizontal,
    /// Runs down, increasing row.
    Vertical,
}

/// A ship placed on a `size`×`size` board: origin, orientation and length.
///
/// Decoding goes through the same checks as [`Placement::new`]; the board side
/// is not part of the encoding, so only a non-empty run whose far end is
/// addressable is guaranteed. Board operations still bounds-check every cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "PlacementRepr"))]
pub struct Placement {
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
}

impl Placement {
    /// Describe a ship of `length` at (`row`, `col`) running in `orientation`.
    /// Fails when any of its cells would fall outside a `size`×`size` board.
    pub fn new(
        row: usize,
        col: usize,
        orientation: Orientation,
        length: usize,
        size: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 || length > size {
            return Err(BoardError::InvalidShipLength { length, size });
        }
        if row >= size || col >= size {
            return Err(BoardError::OutOfBounds { row, col });
        }
        // Ensure the far end stays on the board
        let (end_r, end_c) = match orientation {
            Orientation::Horizontal => (row, col.saturating_add(length - 1)),
            Orientation::Vertical => (row.saturating_add(length - 1), col),
        };
        if end_r >= size || end_c >= size {
            return Err(BoardError::OutOfBounds {
                row: end_r,
                col: end_c,
            });
        }
        Ok(Placement {
            row,
            col,
            orientation,
            length,
        })
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Returns `true` if (`row`, `col`) is one of the ship's cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                row == self.row && col >= self.col && col < self.col + self.length
            }
            Orientation::Vertical => {
                col == self.col && row >= self.row && row < self.row + self.length
            }
        }
    }
}

/// Wire shape of a [`Placement`], validated on the way in.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct PlacementRepr {
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
}

#[cfg(feature = "std")]
impl TryFrom<PlacementRepr> for Placement {
    type Error = BoardError;

    fn try_from(repr: PlacementRepr) -> Result<Self, Self::Error> {
        // smallest board the run could sit on
        let size = repr
            .row
            .max(repr.col)
            .checked_add(repr.length)
            .ok_or(BoardError::OutOfBounds {
                row: repr.row,
                col: repr.col,
            })?;
        Placement::new(repr.row, repr.col, repr.orientation, repr.length, size)
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ origin: ({}, {}), orientation: {:?}, length: {} }}",
            self.row, self.col, self.orientation, self.length,
        )
    }
}
