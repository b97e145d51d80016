use fleet_layout::{BoardError, Orientation, Placement};

#[test]
fn test_new_and_cells() -> Result<(), BoardError> {
    let ship = Placement::new(2, 1, Orientation::Horizontal, 3, 5)?;
    assert_eq!(ship.origin(), (2, 1));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.length(), 3);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
    Ok(())
}

#[test]
fn test_contains() -> Result<(), BoardError> {
    let ship = Placement::new(0, 0, Orientation::Vertical, 4, 5)?;
    for (r, c) in ship.cells() {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(4, 0));
    assert!(!ship.contains(0, 1));
    Ok(())
}

#[test]
fn test_edges() {
    // touching the far edge is fine
    assert!(Placement::new(4, 2, Orientation::Horizontal, 3, 5).is_ok());
    assert!(Placement::new(2, 4, Orientation::Vertical, 3, 5).is_ok());
    // one past is not
    assert_eq!(
        Placement::new(3, 0, Orientation::Vertical, 3, 5).unwrap_err(),
        BoardError::OutOfBounds { row: 5, col: 0 }
    );
    assert_eq!(
        Placement::new(5, 0, Orientation::Horizontal, 1, 5).unwrap_err(),
        BoardError::OutOfBounds { row: 5, col: 0 }
    );
}

#[test]
fn test_invalid_length() {
    assert_eq!(
        Placement::new(0, 0, Orientation::Horizontal, 0, 5).unwrap_err(),
        BoardError::InvalidShipLength { length: 0, size: 5 }
    );
    assert_eq!(
        Placement::new(0, 0, Orientation::Vertical, 6, 5).unwrap_err(),
        BoardError::InvalidShipLength { length: 6, size: 5 }
    );
}
