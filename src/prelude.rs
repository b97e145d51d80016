//! Commonly used types and utilities for ease of import.

pub use crate::{
    standard_fleet, Board, BoardError, CellState, FleetPlacer, Orientation, Placement,
    PlacerConfig, Sampling,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_board};
