use broadside::{AttackOutcome, Board, CellState, FLEET_10, SUPPORTED_SIZES, fleet_for};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random fleet placement always covers exactly the template's cells,
    /// with no overlap and each ship's run matching its template entry.
    #[test]
    fn fleet_covers_exactly_the_template(seed in any::<u64>(), size_idx in 0..3usize) {
        let dimension = SUPPORTED_SIZES[size_idx];
        let fleet = fleet_for(dimension).unwrap();
        let mut board = Board::new(dimension);
        let mut rng = StdRng::seed_from_u64(seed);
        board.place_fleet(fleet, &mut rng);

        let expected: usize = fleet.iter().map(|&(length, _)| length).sum();
        let occupied = board
            .grid()
            .iter()
            .flatten()
            .filter(|&&cell| cell == CellState::Ship)
            .count();
        prop_assert_eq!(occupied, expected);

        for (ship, &(length, name)) in board.ships().iter().zip(fleet) {
            prop_assert_eq!(ship.length(), length);
            prop_assert_eq!(ship.cells().len(), length);
            prop_assert_eq!(ship.name(), name);
        }
    }

    /// The second shot at any coordinate reports `AlreadyTargeted` and
    /// changes nothing.
    #[test]
    fn repeat_fire_is_idempotent(seed in any::<u64>(), row in 0..10usize, col in 0..10usize) {
        let mut board = Board::new(10);
        let mut rng = StdRng::seed_from_u64(seed);
        board.place_fleet(&FLEET_10, &mut rng);

        let first = board.attack(row, col);
        prop_assert_ne!(first, AttackOutcome::AlreadyTargeted);
        let grid_after = board.grid().to_vec();
        let ships_after = board.ships().to_vec();

        prop_assert_eq!(board.attack(row, col), AttackOutcome::AlreadyTargeted);
        prop_assert_eq!(board.grid(), &grid_after[..]);
        prop_assert_eq!(board.ships(), &ships_after[..]);
    }
}
