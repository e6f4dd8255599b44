//! Complete session state.
//!
//! One `GameState` per game session. It is exclusively owned: sessions
//! running concurrently in one process must not share boards, players,
//! or trackers. All mutation goes through the resolution engine; the
//! state itself only stores.

use im::Vector;

use super::action::ActionRecord;
use super::config::GameConfig;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use super::turn::TurnTracker;
use crate::board::Board;
use crate::cult::CultBoard;

/// Everything one session owns.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The terrain arena.
    pub board: Board,
    /// All player records.
    pub players: PlayerMap<Player>,
    /// The four cult tracks.
    pub cults: CultBoard,
    /// Turn and round bookkeeping.
    pub tracker: TurnTracker,
    /// Every resolved attempt, oldest first. Persistent vector so
    /// snapshots of the history are cheap.
    history: Vector<ActionRecord>,
    /// Setup randomness; deterministic from the session seed.
    pub rng: GameRng,
}

impl GameState {
    /// Assemble a session from its parts, with counters derived from
    /// the config.
    #[must_use]
    pub fn new(board: Board, players: PlayerMap<Player>, config: &GameConfig, rng: GameRng) -> Self {
        let player_count = players.player_count();
        Self {
            board,
            players,
            cults: CultBoard::new(player_count, config.cult_ceiling, config.cult_steps),
            tracker: TurnTracker::new(
                player_count,
                config.setup_dwellings_per_player,
                config.rounds,
            ),
            history: Vector::new(),
            rng,
        }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.tracker.current_player()
    }

    /// The current player's record.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.tracker.current_player()]
    }

    /// Append one resolved attempt to the history.
    pub fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// The attempt history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
