//! Random fleet placement by capped rejection sampling.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{PlacerConfig, Sampling};
use crate::ship::{Orientation, Placement};

/// Places ships at random free positions on a [`Board`].
///
/// The placer owns its random source; nothing else carries over between
/// calls. Ships are placed one at a time in the order given, without
/// backtracking, so an early placement can leave no room for a later ship.
pub struct FleetPlacer<R> {
    rng: R,
    config: PlacerConfig,
}

impl FleetPlacer<SmallRng> {
    /// Placer driven by a `SmallRng` seeded from `seed`, for reproducible layouts.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FleetPlacer<R> {
    /// Create a placer with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, PlacerConfig::default())
    }

    pub fn with_config(rng: R, config: PlacerConfig) -> Self {
        Self { rng, config }
    }

    /// Attempt cap and sampling mode in effect.
    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// Draw one candidate for a ship of `length`. `None` means the draw was rejected.
    fn draw(&mut self, board: &Board, length: usize) -> Option<Placement> {
        let n = board.size();
        match self.config.sampling {
            Sampling::HorizontalFirst => {
                let r = self.rng.random_range(0..n);
                let c = self.rng.random_range(0..n);
                [Orientation::Horizontal, Orientation::Vertical]
                    .into_iter()
                    .filter_map(|o| Placement::new(r, c, o, length, n).ok())
                    .find(|p| board.fits(p))
            }
            Sampling::Uniform => {
                let orient = if self.rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_r, max_c) = match orient {
                    Orientation::Horizontal => (n - 1, n - length),
                    Orientation::Vertical => (n - length, n - 1),
                };
                let r = self.rng.random_range(0..=max_r);
                let c = self.rng.random_range(0..=max_c);
                Placement::new(r, c, orient, length, n)
                    .ok()
                    .filter(|p| board.fits(p))
            }
        }
    }

    /// Place one ship of `length` at a random free position and return where it went.
    ///
    /// Fails with [`BoardError::InvalidShipLength`] before sampling when the ship
    /// cannot fit the board at all, and with [`BoardError::PlacementExhausted`]
    /// once `max_attempts` draws have been rejected. The board is untouched on
    /// failure.
    pub fn place_ship(&mut self, board: &mut Board, length: usize) -> Result<Placement, BoardError> {
        check_length(board, length)?;
        for attempt in 1..=self.config.max_attempts {
            match self.draw(board, length) {
                Some(placement) => {
                    board.occupy_span(&placement)?;
                    debug!(
                        "placed ship of length {} at {:?} {:?} (attempt {})",
                        length,
                        placement.origin(),
                        placement.orientation(),
                        attempt
                    );
                    return Ok(placement);
                }
                None => trace!("rejected draw {} for length {}", attempt, length),
            }
        }
        warn!(
            "no room for ship of length {} after {} attempts",
            length, self.config.max_attempts
        );
        Err(BoardError::PlacementExhausted {
            length,
            attempts: self.config.max_attempts,
        })
    }

    /// Place every ship in `lengths`, in order.
    ///
    /// All lengths are validated up front, so an invalid length never leaves a
    /// partial layout. On `PlacementExhausted` the ships placed before the
    /// failing one stay on the board.
    pub fn place_fleet(
        &mut self,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<Vec<Placement>, BoardError> {
        for &len in lengths {
            check_length(board, len)?;
        }
        let (placed, stopped) = self.place_until_stuck(board, lengths);
        match stopped {
            Some(e) => Err(e),
            None => Ok(placed),
        }
    }

    /// Place ships in order until one fails, keeping everything placed so far.
    /// Returns the placed ships and the error that stopped the run, if any.
    pub fn place_until_stuck(
        &mut self,
        board: &mut Board,
        lengths: &[usize],
    ) -> (Vec<Placement>, Option<BoardError>) {
        let mut placed = Vec::with_capacity(lengths.len());
        for &len in lengths {
            match self.place_ship(board, len) {
                Ok(p) => placed.push(p),
                Err(e) => return (placed, Some(e)),
            }
        }
        (placed, None)
    }

    /// Like [`FleetPlacer::place_fleet`], but restores the board to its prior
    /// state if any ship fails to place.
    pub fn place_fleet_atomic(
        &mut self,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<Vec<Placement>, BoardError> {
        let snapshot = board.clone();
        self.place_fleet(board, lengths).map_err(|e| {
            warn!("fleet placement failed, rolling back: {}", e);
            *board = snapshot;
            e
        })
    }

    /// Clear the board and lay out a whole new fleet. All or nothing: on
    /// failure the board keeps the layout it had before the call.
    pub fn random_layout(
        &mut self,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<Vec<Placement>, BoardError> {
        let previous = board.clone();
        board.reset();
        self.place_fleet_atomic(board, lengths).map_err(|e| {
            *board = previous;
            e
        })
    }
}

fn check_length(board: &Board, length: usize) -> Result<(), BoardError> {
    if length == 0 || length > board.size() {
        return Err(BoardError::InvalidShipLength {
            length,
            size: board.size(),
        });
    }
    Ok(())
}
