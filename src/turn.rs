use std::time::Duration;

use log::info;

use crate::board::Board;
use crate::bot::plan_shots;
use crate::types::AttackOutcome;

/// Delay between successive resolved bot shots, so the output stays readable.
pub const DEFAULT_BOT_PACE: Duration = Duration::from_millis(500);

/// Supplies validated in-range coordinates for a human turn. Implemented by
/// the interactive input layer; asking again after `AlreadyTargeted` is the
/// reprompt.
pub trait CoordinateSource {
    fn next_coordinate(&mut self) -> (usize, usize);
}

/// Drives one player's turn against an opponent board: fire, keep the turn on
/// a hit, end it on a miss, stop the moment the opponent fleet is gone.
pub struct TurnController {
    pace: Duration,
}

impl TurnController {
    pub fn new(pace: Duration) -> Self {
        Self { pace }
    }

    /// Returns `true` when this turn ended the game.
    pub fn take_human_turn(&self, source: &mut dyn CoordinateSource, target: &mut Board) -> bool {
        loop {
            let (row, col) = source.next_coordinate();
            let outcome = target.attack(row, col);
            info!("shot at ({row}, {col}) -> {outcome:?}");
            match outcome {
                // not consumed; ask for another coordinate
                AttackOutcome::AlreadyTargeted => continue,
                AttackOutcome::Hit | AttackOutcome::Sunk => {
                    if target.all_sunk() {
                        return true;
                    }
                }
                AttackOutcome::Miss => return false,
            }
        }
    }

    /// Bot turn: ask the strategy worker for a ranked list, fire candidates
    /// in order, and re-rank after every hit so fresh hits feed the hunt set.
    pub async fn take_bot_turn(&self, target: &mut Board) -> bool {
        loop {
            let candidates = plan_shots(target.grid().to_vec(), target.untried_cells()).await;
            if candidates.is_empty() {
                return target.all_sunk();
            }
            let mut landed = false;
            for (row, col) in candidates {
                let outcome = target.attack(row, col);
                info!("bot shot at ({row}, {col}) -> {outcome:?}");
                match outcome {
                    // stale candidate; advance without consuming the turn
                    AttackOutcome::AlreadyTargeted => continue,
                    AttackOutcome::Hit | AttackOutcome::Sunk => {
                        if target.all_sunk() {
                            return true;
                        }
                        landed = true;
                        break;
                    }
                    AttackOutcome::Miss => return false,
                }
            }
            if landed {
                tokio::time::sleep(self.pace).await;
            }
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(DEFAULT_BOT_PACE)
    }
}
