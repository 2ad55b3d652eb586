use anyhow::{Result, bail};
use log::info;

use crate::board::Board;
use crate::persist::{GameSnapshot, GameStatsReport, PersistenceStore, PlayerRecord, PlayerSnapshot};
use crate::turn::{CoordinateSource, TurnController};
use crate::types::{epoch_millis, fleet_for};

pub struct SessionPlayer {
    pub name: String,
    pub is_bot: bool,
    pub board: Board,
    pub record: PlayerRecord,
}

/// Alternates turns between the two players and keeps the persistence store
/// in step: a snapshot after every turn, records/stats/cleanup at game end.
pub struct GameSession {
    board_size: usize,
    fleet: &'static [(usize, &'static str)],
    players: [SessionPlayer; 2],
    turn: usize,
    winner: Option<usize>,
    controller: TurnController,
    store: PersistenceStore,
}

impl GameSession {
    /// Start a fresh session. Boards come back empty; the caller places
    /// fleets (manually per ship, or via `Board::place_fleet`) before the
    /// first `play_turn`.
    pub fn new(
        store: PersistenceStore,
        controller: TurnController,
        board_size: usize,
        names: [(String, bool); 2],
    ) -> Result<Self> {
        let Some(fleet) = fleet_for(board_size) else {
            bail!("unsupported board size {board_size}");
        };
        let players = names.map(|(name, is_bot)| {
            let record = store.load_player_data(&name);
            SessionPlayer {
                board: Board::new(board_size),
                name,
                is_bot,
                record,
            }
        });
        info!(
            "new game: {} vs {} on {board_size}x{board_size}",
            players[0].name, players[1].name
        );
        Ok(Self {
            board_size,
            fleet,
            players,
            turn: 0,
            winner: None,
            controller,
            store,
        })
    }

    /// Rebuild a session from a saved snapshot.
    pub fn resume(
        store: PersistenceStore,
        controller: TurnController,
        snapshot: GameSnapshot,
    ) -> Result<Self> {
        let Some(fleet) = fleet_for(snapshot.board_size) else {
            bail!("saved game has unsupported board size {}", snapshot.board_size);
        };
        let players = snapshot.players.map(|p| SessionPlayer {
            name: p.name,
            is_bot: p.is_bot,
            board: p.board,
            record: p.player_data,
        });
        info!(
            "resumed game: {} vs {}, {} to act",
            players[0].name,
            players[1].name,
            players[snapshot.turn % 2].name
        );
        Ok(Self {
            board_size: snapshot.board_size,
            fleet,
            players,
            turn: snapshot.turn % 2,
            winner: None,
            controller,
            store,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn store(&self) -> &PersistenceStore {
        &self.store
    }

    pub fn fleet(&self) -> &'static [(usize, &'static str)] {
        self.fleet
    }

    pub fn players(&self) -> &[SessionPlayer; 2] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [SessionPlayer; 2] {
        &mut self.players
    }

    pub fn active_player(&self) -> &SessionPlayer {
        &self.players[self.turn]
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<&SessionPlayer> {
        self.winner.map(|i| &self.players[i])
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board_size: self.board_size,
            players: self.players.each_ref().map(|p| PlayerSnapshot {
                name: p.name.clone(),
                is_bot: p.is_bot,
                board: p.board.clone(),
                player_data: p.record.clone(),
            }),
            turn: self.turn,
            ships_template: self
                .fleet
                .iter()
                .map(|&(length, name)| (length, name.to_string()))
                .collect(),
            save_time: epoch_millis(),
        }
    }

    /// Drive one full turn of the active player. Returns the winner's name
    /// once the game is over, `None` while it continues.
    pub async fn play_turn(&mut self, source: &mut dyn CoordinateSource) -> Option<String> {
        if let Some(i) = self.winner {
            return Some(self.players[i].name.clone());
        }

        let attacker = self.turn;
        let defender = 1 - attacker;
        let game_over = {
            let (left, right) = self.players.split_at_mut(1);
            let (acting, opposing) = if attacker == 0 {
                (&left[0], &mut right[0])
            } else {
                (&right[0], &mut left[0])
            };
            if acting.is_bot {
                self.controller.take_bot_turn(&mut opposing.board).await
            } else {
                self.controller
                    .take_human_turn(source, &mut opposing.board)
            }
        };

        if game_over {
            self.finish(attacker, defender)
        } else {
            self.turn = defender;
            self.store.save_game_state(&self.snapshot());
            None
        }
    }

    fn finish(&mut self, winner: usize, loser: usize) -> Option<String> {
        let winner_name = self.players[winner].name.clone();
        info!("game over: {winner_name} wins");

        self.store
            .update_game_result(&winner_name, &self.players[loser].name);
        self.store.write_game_stats(&GameStatsReport {
            winner: self.players[winner].board.stats(),
            loser: self.players[loser].board.stats(),
        });
        self.store.clear_game_state();
        for player in &mut self.players {
            player.record = self.store.load_player_data(&player.name);
        }
        self.winner = Some(winner);
        Some(winner_name)
    }
}
