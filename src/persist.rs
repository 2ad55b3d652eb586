use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::epoch_millis;

const SAVE_FILE: &str = "current_game.json";
const PLAYER_PREFIX: &str = "player_";
const STATS_PREFIX: &str = "game_stats_";

/// Cross-session aggregate statistics for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub created: u64,
    pub last_played: u64,
}

impl PlayerRecord {
    pub fn new(name: &str) -> Self {
        let now = epoch_millis();
        Self {
            name: name.to_string(),
            total_games: 0,
            wins: 0,
            losses: 0,
            created: now,
            last_played: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub name: String,
    pub is_bot: bool,
    pub board: Board,
    pub player_data: PlayerRecord,
}

/// A fully self-contained serialization of an in-progress session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board_size: usize,
    pub players: [PlayerSnapshot; 2],
    /// Index of the player who acts next.
    pub turn: usize,
    pub ships_template: Vec<(usize, String)>,
    pub save_time: u64,
}

/// End-of-game condition of one board: shots it absorbed and fleet damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub hits: usize,
    pub misses: usize,
    pub ships_intact: usize,
    pub ships_damaged: usize,
    pub ships_sunk: usize,
    pub total_ships: usize,
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatsReport {
    pub winner: BoardStats,
    pub loser: BoardStats,
}

/// The on-disk key for a player name: anything outside ASCII alphanumerics
/// becomes `_`. Distinct names may collide after this mapping; colliding
/// players share one record file, which is accepted behavior.
pub fn sanitize_player_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// JSON-on-disk persistence: one file per player record, a single-slot game
/// snapshot, and one-shot end-of-game stats files. Every failure here is
/// logged and degraded to a default; nothing aborts play.
pub struct PersistenceStore {
    dir: PathBuf,
}

impl PersistenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    fn player_path(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{PLAYER_PREFIX}{}.json", sanitize_player_name(name)))
    }

    fn save_path(&self) -> PathBuf {
        self.dir.join(SAVE_FILE)
    }

    /// The stored record for `name`, or a zeroed default. A missing file is
    /// created on the spot; any other failure leaves the default unsaved.
    pub fn load_player_data(&self, name: &str) -> PlayerRecord {
        match fs::read_to_string(self.player_path(name)) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(record) => record,
                Err(err) => {
                    warn!("corrupt record for {name}: {err}");
                    PlayerRecord::new(name)
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let mut record = PlayerRecord::new(name);
                self.save_player_data(name, &mut record);
                record
            }
            Err(err) => {
                warn!("failed to read record for {name}: {err}");
                PlayerRecord::new(name)
            }
        }
    }

    /// Stamp `lastPlayed` and overwrite the player file.
    pub fn save_player_data(&self, name: &str, record: &mut PlayerRecord) {
        record.last_played = epoch_millis();
        if let Err(err) = self.write_json(&self.player_path(name), record) {
            warn!("failed to save record for {name}: {err}");
        }
    }

    /// Two separate writes, no transaction: a crash between them can leave
    /// an inconsistent but individually valid pair of records.
    pub fn update_game_result(&self, winner: &str, loser: &str) {
        let mut won = self.load_player_data(winner);
        won.total_games += 1;
        won.wins += 1;
        self.save_player_data(winner, &mut won);

        let mut lost = self.load_player_data(loser);
        lost.total_games += 1;
        lost.losses += 1;
        self.save_player_data(loser, &mut lost);
    }

    pub fn save_game_state(&self, snapshot: &GameSnapshot) {
        if let Err(err) = self.write_json(&self.save_path(), snapshot) {
            warn!("failed to save game state: {err}");
        }
    }

    /// The saved snapshot, if a readable one exists. An empty or corrupt
    /// file counts as "no save".
    pub fn load_game_state(&self) -> Option<GameSnapshot> {
        let text = match fs::read_to_string(self.save_path()) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!("failed to read saved game: {err}");
                }
                return None;
            }
        };
        if text.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&text) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!("ignoring corrupt saved game: {err}");
                None
            }
        }
    }

    pub fn has_saved_game(&self) -> bool {
        self.load_game_state().is_some()
    }

    pub fn clear_game_state(&self) {
        match fs::remove_file(self.save_path()) {
            Ok(()) => info!("saved game cleared"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => warn!("failed to clear saved game: {err}"),
        }
    }

    pub fn write_game_stats(&self, report: &GameStatsReport) {
        let path = self
            .dir
            .join(format!("{STATS_PREFIX}{}.json", epoch_millis()));
        if let Err(err) = self.write_json(&path, report) {
            warn!("failed to write game stats: {err}");
        }
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let text = serde_json::to_string_pretty(value)?;
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
