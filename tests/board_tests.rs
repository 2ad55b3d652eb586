use broadside::{AttackOutcome, Board, CellState, SUPPORTED_SIZES, Ship, fleet_for};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn carrier_sunk_cell_by_cell() {
    let mut board = Board::new(10);
    assert!(board.place_ship(Ship::new("Carrier", 5), 0, 0, true));

    assert_eq!(board.attack(0, 0), AttackOutcome::Hit);
    assert_eq!(board.attack(0, 0), AttackOutcome::AlreadyTargeted);
    assert_eq!(board.attack(0, 1), AttackOutcome::Hit);
    assert_eq!(board.attack(0, 2), AttackOutcome::Hit);
    assert_eq!(board.attack(0, 3), AttackOutcome::Hit);
    assert_eq!(board.attack(0, 4), AttackOutcome::Sunk);

    assert!(board.ships()[0].is_sunk());
    assert!(board.all_sunk());
}

#[test]
fn miss_then_already_targeted() {
    let mut board = Board::new(10);
    assert_eq!(board.attack(5, 5), AttackOutcome::Miss);
    assert_eq!(board.cell(5, 5), CellState::Miss);
    assert_eq!(board.attack(5, 5), AttackOutcome::AlreadyTargeted);
    assert_eq!(board.cell(5, 5), CellState::Miss);
}

#[test]
fn placement_rejects_out_of_bounds() {
    let mut board = Board::new(10);
    assert!(!board.place_ship(Ship::new("Carrier", 5), 0, 6, true));
    assert!(!board.place_ship(Ship::new("Carrier", 5), 6, 0, false));
    assert!(!board.place_ship(Ship::new("Destroyer", 2), 10, 0, true));
    assert!(!board.place_ship(Ship::new("Destroyer", 2), 0, 10, false));

    assert!(board.ships().is_empty());
    let untouched = board
        .grid()
        .iter()
        .flatten()
        .all(|&cell| cell == CellState::Water);
    assert!(untouched);
}

#[test]
fn placement_collision_leaves_board_unchanged() {
    let mut board = Board::new(10);
    assert!(board.place_ship(Ship::new("Cruiser", 3), 0, 0, true));
    // crosses the cruiser at (0, 2)
    assert!(!board.place_ship(Ship::new("Battleship", 4), 0, 2, false));

    assert_eq!(board.ships().len(), 1);
    let occupied = board
        .grid()
        .iter()
        .flatten()
        .filter(|&&cell| cell == CellState::Ship)
        .count();
    assert_eq!(occupied, 3);
}

#[test]
fn fleet_placement_matches_template() {
    for dimension in SUPPORTED_SIZES {
        let fleet = fleet_for(dimension).unwrap();
        let mut board = Board::new(dimension);
        let mut rng = StdRng::seed_from_u64(7);
        board.place_fleet(fleet, &mut rng);

        assert_eq!(board.ships().len(), fleet.len());
        let expected: usize = fleet.iter().map(|&(length, _)| length).sum();
        let occupied = board
            .grid()
            .iter()
            .flatten()
            .filter(|&&cell| cell == CellState::Ship)
            .count();
        assert_eq!(occupied, expected, "dimension {dimension}");
    }
}

#[test]
fn unsupported_dimension_has_no_fleet() {
    assert!(fleet_for(12).is_none());
    assert!(fleet_for(0).is_none());
}

#[test]
fn all_sunk_requires_every_ship_down() {
    let mut board = Board::new(10);
    assert!(board.place_ship(Ship::new("Destroyer", 2), 0, 0, true));
    assert!(board.place_ship(Ship::new("Patrol Boat", 2), 5, 5, false));

    assert_eq!(board.attack(0, 0), AttackOutcome::Hit);
    assert_eq!(board.attack(0, 1), AttackOutcome::Sunk);
    assert!(!board.all_sunk());

    assert_eq!(board.attack(5, 5), AttackOutcome::Hit);
    assert_eq!(board.attack(6, 5), AttackOutcome::Sunk);
    assert!(board.all_sunk());
}

#[test]
fn untried_cells_shrink_as_shots_resolve() {
    let mut board = Board::new(10);
    assert_eq!(board.untried_cells().len(), 100);
    board.attack(0, 0);
    board.attack(9, 9);
    let open = board.untried_cells();
    assert_eq!(open.len(), 98);
    assert!(!open.contains(&(0, 0)));
    assert!(!open.contains(&(9, 9)));
}

#[test]
fn stats_reflect_fleet_condition() {
    let mut board = Board::new(10);
    assert!(board.place_ship(Ship::new("Destroyer", 2), 0, 0, true));
    assert!(board.place_ship(Ship::new("Cruiser", 3), 5, 5, false));

    board.attack(0, 0); // damage the destroyer
    board.attack(9, 9); // miss

    let stats = board.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.ships_intact, 1);
    assert_eq!(stats.ships_damaged, 1);
    assert_eq!(stats.ships_sunk, 0);
    assert_eq!(stats.total_ships, 2);
}
