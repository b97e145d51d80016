#![cfg(feature = "std")]

//! Text rendering of boards. Read-only: nothing here mutates a board.

use std::fmt::Write;
use std::string::String;

use crate::board::{Board, CellState};

/// Letter label for a row or column index: `A`..`Z`, then `AA`, `AB`, ...
pub fn coord_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    label
}

/// Name of the cell at (`row`, `col`): row letter followed by column letter,
/// e.g. row 0, col 1 is `"AB"`.
pub fn cell_name(row: usize, col: usize) -> String {
    std::format!("{}{}", coord_label(row), coord_label(col))
}

/// Render `board` as a lettered grid, `#` for occupied and `.` for empty cells.
pub fn render_board(board: &Board) -> String {
    let width = coord_label(board.size().saturating_sub(1)).len();
    let mut out = String::new();
    let _ = write!(out, "{:width$} ", "", width = width);
    for c in 0..board.size() {
        let _ = write!(out, " {:>width$}", coord_label(c), width = width);
    }
    out.push('\n');
    for (r, row) in board.iter_rows().enumerate() {
        let _ = write!(out, "{:>width$} ", coord_label(r), width = width);
        for cell in row {
            let ch = match cell {
                CellState::Empty => '.',
                CellState::Occupied => '#',
            };
            let _ = write!(out, " {:>width$}", ch, width = width);
        }
        out.push('\n');
    }
    out
}

/// Print a board to stdout.
pub fn print_board(board: &Board) {
    std::print!("{}", render_board(board));
}
