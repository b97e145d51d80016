use std::collections::HashSet;

use fleet_layout::{Board, BoardError, CellState, FleetPlacer, PlacerConfig, Sampling};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn sampling() -> impl Strategy<Value = Sampling> {
    prop_oneof![Just(Sampling::Uniform), Just(Sampling::HorizontalFirst)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn out_of_range_is_rejected(n in 1usize..16, row in 0usize..40, col in 0usize..40) {
        let mut board = Board::new(n).unwrap();
        let in_range = row < n && col < n;
        prop_assert_eq!(board.get(row, col).is_ok(), in_range);
        prop_assert_eq!(board.occupy(row, col).is_ok(), in_range);
        if !in_range {
            prop_assert_eq!(board.get(row, col).unwrap_err(), BoardError::OutOfBounds { row, col });
            prop_assert_eq!(board.occupied_count(), 0);
        }
    }

    #[test]
    fn reset_empties_any_board(n in 1usize..12, cells in prop::collection::vec((0usize..12, 0usize..12), 0..60)) {
        let mut board = Board::new(n).unwrap();
        for (r, c) in cells {
            let _ = board.occupy(r, c);
        }
        board.reset();
        for r in 0..n {
            for c in 0..n {
                prop_assert_eq!(board.get(r, c).unwrap(), CellState::Empty);
            }
        }
    }

    #[test]
    fn fleet_cells_never_overlap(
        seed in any::<u64>(),
        mode in sampling(),
        n in 4usize..12,
        lengths in prop::collection::vec(1usize..4, 0..6),
    ) {
        let mut placer = FleetPlacer::with_config(
            SmallRng::seed_from_u64(seed),
            PlacerConfig { sampling: mode, ..PlacerConfig::default() },
        );
        let mut board = Board::new(n).unwrap();
        // up to 15 cells on as few as 16, so exhaustion is possible but overlap never is
        match placer.place_fleet(&mut board, &lengths) {
            Ok(placements) => {
                let mut seen = HashSet::new();
                for p in &placements {
                    for cell in p.cells() {
                        prop_assert!(seen.insert(cell), "overlap at {:?}", cell);
                    }
                }
                prop_assert_eq!(board.occupied_count(), lengths.iter().sum::<usize>());
                prop_assert_eq!(seen.len(), board.occupied_count());
            }
            Err(e) => {
                let is_exhausted = matches!(e, BoardError::PlacementExhausted { .. });
                prop_assert!(is_exhausted);
            }
        }
    }

    #[test]
    fn oversized_ship_leaves_board_unchanged(seed in any::<u64>(), n in 1usize..10, extra in 1usize..5) {
        let mut placer = FleetPlacer::seeded(seed);
        let mut board = Board::new(n).unwrap();
        placer.place_ship(&mut board, 1).unwrap();
        let before = board.clone();
        let err = placer.place_ship(&mut board, n + extra).unwrap_err();
        prop_assert_eq!(err, BoardError::InvalidShipLength { length: n + extra, size: n });
        prop_assert_eq!(board, before);
    }
}
