use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Board dimensions the fleet tables cover. Any other dimension is rejected.
pub const SUPPORTED_SIZES: [usize; 3] = [10, 14, 16];

pub const FLEET_10: [(usize, &str); 5] = [
    (5, "Carrier"),
    (4, "Battleship"),
    (3, "Cruiser"),
    (3, "Submarine"),
    (2, "Destroyer"),
];

pub const FLEET_14: [(usize, &str); 8] = [
    (5, "Carrier"),
    (4, "Battleship"),
    (4, "Frigate"),
    (3, "Cruiser"),
    (3, "Submarine"),
    (3, "Corvette"),
    (2, "Destroyer"),
    (2, "Patrol Boat"),
];

pub const FLEET_16: [(usize, &str); 10] = [
    (6, "Dreadnought"),
    (5, "Carrier"),
    (4, "Battleship"),
    (4, "Frigate"),
    (3, "Cruiser"),
    (3, "Submarine"),
    (3, "Corvette"),
    (2, "Destroyer"),
    (2, "Patrol Boat"),
    (2, "Minesweeper"),
];

/// The fleet every player places on a board of the given dimension.
pub fn fleet_for(dimension: usize) -> Option<&'static [(usize, &'static str)]> {
    match dimension {
        10 => Some(&FLEET_10),
        14 => Some(&FLEET_14),
        16 => Some(&FLEET_16),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    Water,
    Ship,
    Hit,
    Miss,
}

/// What a single shot resolved to. `AlreadyTargeted` is a normal outcome,
/// not an error: it means "pick again within the same turn".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    Hit,
    Sunk,
    Miss,
    AlreadyTargeted,
}

/// Milliseconds since the Unix epoch. All persisted timestamps use this.
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
