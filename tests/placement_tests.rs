use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    fleet_for, place_fleet, place_fleet_with_retries, place_random_ship, Board, CellState, Coord,
    GameConfig, GameError, Orientation, PlacedShip, BOARD_SIZE, PLACEMENT_ATTEMPTS,
};

fn assert_fleet_is_legal(board: &Board, ships: &[PlacedShip]) {
    let mut owner = HashMap::new();
    for (id, ship) in ships.iter().enumerate() {
        for cell in ship.cells() {
            assert!(board.contains(cell), "{} is off the board", cell);
            assert_eq!(board.get(cell), CellState::Occupied);
            assert!(owner.insert(cell, id).is_none(), "ships overlap at {}", cell);
        }
    }
    for (&cell, &id) in &owner {
        for n in cell.neighbors() {
            if let Some(&other) = owner.get(&n) {
                assert_eq!(other, id, "ships touch at {} and {}", cell, n);
            }
        }
    }
    assert_eq!(board.count(CellState::Occupied), owner.len());
    assert_eq!(board.count(CellState::Near), 0);
}

#[test]
fn test_default_fleet_is_a_pyramid() {
    assert_eq!(fleet_for(4), vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);
    assert_eq!(GameConfig::default().total_ship_cells(), 20);
    assert_eq!(fleet_for(1), vec![1]);
}

#[test]
fn test_place_default_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new(BOARD_SIZE);
    let fleet = GameConfig::default().fleet();
    let ships = place_fleet_with_retries(&mut board, &fleet, PLACEMENT_ATTEMPTS, &mut rng).unwrap();

    assert_eq!(ships.len(), 10);
    let mut sizes: Vec<usize> = ships.iter().map(|s| s.size()).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(sizes, fleet);
    assert_eq!(board.count(CellState::Occupied), 20);
    assert_eq!(board.remaining(), 20);
    assert_eq!(board.stats().to_string(), "total:20 ships: 1 2 3 4");
    assert_fleet_is_legal(&board, &ships);
}

#[test]
fn test_place_fleet_sorts_largest_first() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new(6);
    let ships = place_fleet(&mut board, &[1, 3, 2], &mut rng).unwrap();
    let sizes: Vec<usize> = ships.iter().map(|s| s.size()).collect();
    assert_eq!(sizes, vec![3, 2, 1]);
    assert_fleet_is_legal(&board, &ships);
}

#[test]
fn test_same_seed_same_layout() {
    let fleet = GameConfig::default().fleet();
    let mut b1 = Board::new(BOARD_SIZE);
    let mut b2 = Board::new(BOARD_SIZE);
    let s1 = place_fleet(&mut b1, &fleet, &mut SmallRng::seed_from_u64(9));
    let s2 = place_fleet(&mut b2, &fleet, &mut SmallRng::seed_from_u64(9));
    assert_eq!(s1, s2);
    assert_eq!(b1, b2);
}

#[test]
fn test_ship_too_long_is_exhausted() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new(3);
    assert_eq!(
        place_random_ship(&mut board, 4, Orientation::Horizontal, &mut rng).unwrap_err(),
        GameError::PlacementExhausted { size: 4 }
    );
    assert_eq!(
        place_random_ship(&mut board, 0, Orientation::Horizontal, &mut rng).unwrap_err(),
        GameError::PlacementExhausted { size: 0 }
    );
}

#[test]
fn test_falls_back_to_perpendicular_axis() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(3);
        // the middle row is already taken, so only rows 0 and 2 can hold a 3
        for x in 0..3 {
            board.set(Coord::new(x, 1), CellState::Miss);
        }
        assert_eq!(
            place_random_ship(&mut board.clone(), 3, Orientation::Vertical, &mut rng).unwrap_err(),
            GameError::PlacementExhausted { size: 3 }
        );
        let ships = place_fleet(&mut board, &[3], &mut rng).unwrap();
        assert_eq!(ships[0].orientation(), Orientation::Horizontal);
        assert_ne!(ships[0].origin().y, 1);
    }
}

#[test]
fn test_scan_finds_the_only_slot() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(4);
        for c in board.coords().collect::<Vec<_>>() {
            if c != Coord::new(2, 3) {
                board.set(c, CellState::Miss);
            }
        }
        let ship = place_random_ship(&mut board, 1, Orientation::Horizontal, &mut rng).unwrap();
        assert_eq!(ship.origin(), Coord::new(2, 3));
    }
}

#[test]
fn test_infeasible_fleet_exhausts_retries() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new(3);
    let err = place_fleet_with_retries(&mut board, &[3, 3, 3], 4, &mut rng).unwrap_err();
    assert_eq!(err, GameError::PlacementExhausted { size: 3 });
    assert_eq!(board.count(CellState::Empty), 9);
    assert_eq!(board.remaining(), 0);
}

#[test]
fn test_smaller_board_configuration() {
    let config = GameConfig::new(5, 3).unwrap();
    assert_eq!(config.fleet(), vec![3, 2, 2, 1, 1, 1]);
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = Board::new(config.board_size);
    let ships =
        place_fleet_with_retries(&mut board, &config.fleet(), config.placement_attempts, &mut rng)
            .unwrap();
    assert_eq!(board.count(CellState::Occupied), config.total_ship_cells());
    assert_fleet_is_legal(&board, &ships);
}

#[test]
fn test_config_validation() {
    assert!(GameConfig::new(0, 1).is_err());
    assert!(GameConfig::new(27, 4).is_err());
    assert!(GameConfig::new(8, 0).is_err());
    assert!(GameConfig::new(3, 4).is_err());
    assert!(GameConfig::default()
        .with_placement_attempts(0)
        .validate()
        .is_err());
    assert_eq!(GameConfig::new(8, 4).unwrap(), GameConfig::default());
}
