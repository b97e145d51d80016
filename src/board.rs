//! Board model: a square grid of empty or occupied cells.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::fmt;

use crate::common::BoardError;
use crate::ship::Placement;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
}

/// Serializable board state for saving or exporting a layout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub size: usize,
    /// Row-major cell states, `size * size` entries.
    pub cells: Vec<CellState>,
}

/// A `size`×`size` grid. Every in-range coordinate has a state.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an empty board with sides of `size` cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let count = cell_count(size)?;
        Ok(Board {
            size,
            cells: vec![CellState::Empty; count],
        })
    }

    /// Number of cells along one side.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// State of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Returns `true` if the cell at (row, col) holds no ship.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.get(row, col)? == CellState::Empty)
    }

    /// Mark the cell at (row, col) occupied. Occupying twice is a no-op.
    pub fn occupy(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = CellState::Occupied;
        Ok(())
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::Occupied)
            .count()
    }

    /// Iterate over occupied (row, col) pairs in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == CellState::Occupied)
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Returns `true` when every cell of `placement` is on the board and empty.
    pub fn fits(&self, placement: &Placement) -> bool {
        placement
            .cells()
            .all(|(r, c)| matches!(self.get(r, c), Ok(CellState::Empty)))
    }

    /// Occupy every cell of `placement`. Overlap is not checked; use
    /// [`Board::fits`] first when that matters.
    pub fn occupy_span(&mut self, placement: &Placement) -> Result<(), BoardError> {
        // bounds first so a bad span leaves the board untouched
        for (r, c) in placement.cells() {
            self.index(r, c)?;
        }
        for (r, c) in placement.cells() {
            self.occupy(r, c)?;
        }
        Ok(())
    }
}

/// Cells on a `size`×`size` board; zero sides and overflowing areas are rejected.
fn cell_count(size: usize) -> Result<usize, BoardError> {
    if size == 0 {
        return Err(BoardError::InvalidSize { size });
    }
    size.checked_mul(size).ok_or(BoardError::InvalidSize { size })
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {} }}", self.size)?;
        for row in self.iter_rows() {
            for cell in row {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Occupied => '#',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            size: b.size,
            cells: b.cells.clone(),
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = BoardError;

    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        if state.cells.len() != cell_count(state.size)? {
            return Err(BoardError::InvalidSize { size: state.size });
        }
        Ok(Board {
            size: state.size,
            cells: state.cells,
        })
    }
}
