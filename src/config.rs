#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Default board dimension; the board side is twice the dimension.
pub const DEFAULT_DIMENSION: usize = 8;
/// Largest dimension offered to players.
pub const MAX_DIMENSION: usize = 10;
/// Rejected draws allowed per ship before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// How candidate positions are drawn during placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Draw an orientation, then an in-bounds origin for it. Every feasible
    /// (origin, orientation) pair is equally likely.
    #[default]
    Uniform,
    /// Draw any origin, try horizontal first and fall back to vertical.
    /// Horizontal always wins when both fit.
    HorizontalFirst,
}

/// Tunables for `FleetPlacer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacerConfig {
    pub max_attempts: usize,
    pub sampling: Sampling,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            sampling: Sampling::Uniform,
        }
    }
}

/// Board side for a player-facing dimension.
pub const fn board_size(dimension: usize) -> usize {
    2 * dimension
}

/// Ship lengths of the standard fleet for `dimension`: for each length `L`
/// in `1..=dimension`, `dimension - L + 1` ships, shortest first.
pub fn standard_fleet(dimension: usize) -> Vec<usize> {
    (1..=dimension)
        .flat_map(|len| core::iter::repeat(len).take(dimension - len + 1))
        .collect()
}
