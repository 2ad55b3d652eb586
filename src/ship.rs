use serde::{Deserialize, Serialize};

/// A fleet unit owned by exactly one board. `cells` fills in placement-run
/// order and `hit` stays parallel to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    name: String,
    length: usize,
    cells: Vec<(usize, usize)>,
    hit: Vec<bool>,
}

impl Ship {
    pub fn new(name: &str, length: usize) -> Self {
        debug_assert!(length >= 1);
        Self {
            name: name.to_string(),
            length,
            cells: Vec::with_capacity(length),
            hit: Vec::with_capacity(length),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Claim a cell during placement.
    pub(crate) fn occupy(&mut self, row: usize, col: usize) {
        self.cells.push((row, col));
        self.hit.push(false);
    }

    /// Mark the cell hit if this ship occupies it. Returns whether it did.
    pub(crate) fn take_hit(&mut self, row: usize, col: usize) -> bool {
        match self.cells.iter().position(|&cell| cell == (row, col)) {
            Some(i) => {
                self.hit[i] = true;
                true
            }
            None => false,
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.hit.iter().all(|&h| h)
    }

    pub fn is_damaged(&self) -> bool {
        self.hit.iter().any(|&h| h)
    }

    pub fn hit_count(&self) -> usize {
        self.hit.iter().filter(|&&h| h).count()
    }
}
