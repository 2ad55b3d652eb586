use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::CellState;

/// Cap on how many candidates one ranking request returns.
pub const MAX_CANDIDATES: usize = 10;

/// Rank the untried coordinates of an opponent grid, most promising first.
///
/// Cells orthogonally adjacent to a known hit come first ("target mode");
/// everything else follows in uniformly random order ("hunt mode"). The
/// result is capped at `min(MAX_CANDIDATES, untried.len())` entries.
pub fn rank_moves<R: Rng + ?Sized>(
    grid: &[Vec<CellState>],
    untried: &[(usize, usize)],
    rng: &mut R,
) -> Vec<(usize, usize)> {
    let dimension = grid.len();
    let mut hunt_set = HashSet::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell != CellState::Hit {
                continue;
            }
            for (nr, nc) in orthogonal_neighbors(r, c, dimension) {
                if !matches!(grid[nr][nc], CellState::Hit | CellState::Miss) {
                    hunt_set.insert((nr, nc));
                }
            }
        }
    }

    let mut ranked = Vec::new();
    let mut random_pool = Vec::new();
    for &cell in untried {
        if hunt_set.contains(&cell) {
            ranked.push(cell);
        } else {
            random_pool.push(cell);
        }
    }
    random_pool.shuffle(rng);
    ranked.extend(random_pool);
    ranked.truncate(MAX_CANDIDATES.min(untried.len()));
    ranked
}

/// Worker entry point: moves a point-in-time copy of the grid onto a blocking
/// task and awaits the single ranked list it sends back. Large boards never
/// stall the turn loop this way.
pub async fn plan_shots(
    grid: Vec<Vec<CellState>>,
    untried: Vec<(usize, usize)>,
) -> Vec<(usize, usize)> {
    tokio::task::spawn_blocking(move || {
        let mut rng = rand::rng();
        rank_moves(&grid, &untried, &mut rng)
    })
    .await
    .unwrap_or_default()
}

fn orthogonal_neighbors(row: usize, col: usize, dimension: usize) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push((row - 1, col));
    }
    if row + 1 < dimension {
        neighbors.push((row + 1, col));
    }
    if col > 0 {
        neighbors.push((row, col - 1));
    }
    if col + 1 < dimension {
        neighbors.push((row, col + 1));
    }
    neighbors
}
