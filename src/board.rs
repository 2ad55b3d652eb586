use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::persist::BoardStats;
use crate::ship::Ship;
use crate::types::{AttackOutcome, CellState, epoch_millis};

/// One player's grid and the fleet placed on it. Serializing a board captures
/// everything needed to resume it: cell states plus per-ship hit masks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    dimension: usize,
    cells: Vec<Vec<CellState>>,
    ships: Vec<Ship>,
}

impl Board {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![vec![CellState::Water; dimension]; dimension],
            ships: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn grid(&self) -> &[Vec<CellState>] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|ship| ship.is_sunk())
    }

    /// Try to place `ship` with its bow at (`row`, `col`), extending along
    /// columns when `horizontal` and along rows otherwise. The whole run must
    /// be in bounds and on open water; on failure nothing mutates.
    pub fn place_ship(&mut self, mut ship: Ship, row: usize, col: usize, horizontal: bool) -> bool {
        let len = ship.length();
        if row >= self.dimension || col >= self.dimension {
            return false;
        }
        if horizontal {
            if col + len > self.dimension {
                return false;
            }
            if (0..len).any(|i| self.cells[row][col + i] != CellState::Water) {
                return false;
            }
        } else {
            if row + len > self.dimension {
                return false;
            }
            if (0..len).any(|i| self.cells[row + i][col] != CellState::Water) {
                return false;
            }
        }

        for i in 0..len {
            let (r, c) = if horizontal { (row, col + i) } else { (row + i, col) };
            self.cells[r][c] = CellState::Ship;
            ship.occupy(r, c);
        }
        self.ships.push(ship);
        true
    }

    /// Place every ship in the fleet template, in template order, retrying
    /// random positions until each one fits.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, fleet: &[(usize, &str)], rng: &mut R) {
        for &(length, name) in fleet {
            'place: loop {
                let row = rng.random_range(0..self.dimension);
                let col = rng.random_range(0..self.dimension);
                let horizontal = rng.random_bool(0.5);
                if self.place_ship(Ship::new(name, length), row, col, horizontal) {
                    break 'place;
                }
            }
        }
    }

    /// Resolve a shot at (`row`, `col`). Once a cell is `Hit` or `Miss` every
    /// later shot at it reports `AlreadyTargeted` without further mutation.
    pub fn attack(&mut self, row: usize, col: usize) -> AttackOutcome {
        match self.cells[row][col] {
            CellState::Hit | CellState::Miss => AttackOutcome::AlreadyTargeted,
            CellState::Ship => {
                self.cells[row][col] = CellState::Hit;
                for ship in &mut self.ships {
                    if ship.take_hit(row, col) {
                        return if ship.is_sunk() {
                            AttackOutcome::Sunk
                        } else {
                            AttackOutcome::Hit
                        };
                    }
                }
                // unreachable while the placement invariant holds
                AttackOutcome::Hit
            }
            CellState::Water => {
                self.cells[row][col] = CellState::Miss;
                AttackOutcome::Miss
            }
        }
    }

    /// Coordinates that have not resolved to `Hit` or `Miss` yet, row-major.
    pub fn untried_cells(&self) -> Vec<(usize, usize)> {
        let mut open = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if !matches!(cell, CellState::Hit | CellState::Miss) {
                    open.push((r, c));
                }
            }
        }
        open
    }

    /// End-of-game summary of this board: shots absorbed and fleet condition.
    pub fn stats(&self) -> BoardStats {
        let mut hits = 0;
        let mut misses = 0;
        for cell in self.cells.iter().flatten() {
            match cell {
                CellState::Hit => hits += 1,
                CellState::Miss => misses += 1,
                _ => {}
            }
        }
        let ships_sunk = self.ships.iter().filter(|s| s.is_sunk()).count();
        let ships_damaged = self
            .ships
            .iter()
            .filter(|s| s.is_damaged() && !s.is_sunk())
            .count();
        BoardStats {
            hits,
            misses,
            ships_intact: self.ships.len() - ships_sunk - ships_damaged,
            ships_damaged,
            ships_sunk,
            total_ships: self.ships.len(),
            timestamp: epoch_millis(),
        }
    }
}
