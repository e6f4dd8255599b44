//! Turn and round bookkeeping.
//!
//! ## Round lifecycle
//!
//! ```text
//! Setup (free dwellings remain) -> Round(0) -> ... -> Round(5) -> Finished
//! ```
//!
//! Setup ends when the last free dwelling is placed. A round ends when
//! every player has passed: the pass counter reaching the player count
//! is the only round-advance signal; there is no explicit "end round"
//! call. `Finished` is terminal.
//!
//! The tracker never advances the current player on its own; rotation is
//! an explicit call so a caller can group several actions per turn if
//! its variant allows it.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, PlayerMap};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Initial free dwelling placement; adjacency and cost checks are
    /// bypassed.
    Setup,
    /// Scored round 0-5.
    Round(u8),
    /// All rounds played; no further actions are defined.
    Finished,
}

/// Current player, phase, and the two counters that drive transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTracker {
    player_count: usize,
    rounds: u8,
    current: PlayerId,
    phase: Phase,
    setup_remaining: u8,
    passes: u8,
}

impl TurnTracker {
    /// Create a tracker at the start of setup. With no free dwellings
    /// configured there is no setup phase and round 0 starts at once.
    #[must_use]
    pub fn new(player_count: usize, setup_dwellings_per_player: u8, rounds: u8) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        let setup_remaining = setup_dwellings_per_player * player_count as u8;
        Self {
            player_count,
            rounds,
            current: PlayerId::new(0),
            phase: if setup_remaining == 0 {
                Phase::Round(0)
            } else {
                Phase::Setup
            },
            setup_remaining,
            passes: 0,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Round index as reported to callers: -1 during setup, 0-5 during
    /// scored rounds, 6 once finished.
    #[must_use]
    pub fn round_index(&self) -> i8 {
        match self.phase {
            Phase::Setup => -1,
            Phase::Round(n) => n as i8,
            Phase::Finished => self.rounds as i8,
        }
    }

    /// Are we in the free-placement phase?
    #[must_use]
    pub fn in_setup(&self) -> bool {
        matches!(self.phase, Phase::Setup)
    }

    /// Is the session over?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Free dwelling placements left.
    #[must_use]
    pub fn setup_remaining(&self) -> u8 {
        self.setup_remaining
    }

    /// Consecutive passes this round.
    #[must_use]
    pub fn passes(&self) -> u8 {
        self.passes
    }

    /// Record one free dwelling placement. The last placement starts
    /// round 0. Must only be called during setup.
    pub fn note_setup_dwelling(&mut self) {
        debug_assert!(self.in_setup(), "setup dwelling outside setup phase");
        if self.setup_remaining == 0 {
            return;
        }
        self.setup_remaining -= 1;
        if self.setup_remaining == 0 {
            self.phase = Phase::Round(0);
        }
    }

    /// Record one pass. Returns `true` when this pass completed the
    /// round (counter reset; the caller clears player pass flags).
    pub fn note_pass(&mut self) -> bool {
        self.passes += 1;
        if (self.passes as usize) < self.player_count {
            return false;
        }
        self.passes = 0;
        if let Phase::Round(n) = self.phase {
            self.phase = if n + 1 >= self.rounds {
                Phase::Finished
            } else {
                Phase::Round(n + 1)
            };
        }
        true
    }

    /// Rotate to the next player who has not passed. Leaves the current
    /// player in place when every other player has passed.
    pub fn advance_player(&mut self, players: &PlayerMap<Player>) {
        for step in 1..=self.player_count {
            let next = (self.current.index() + step) % self.player_count;
            let candidate = PlayerId::new(next as u8);
            if !players[candidate].passed {
                self.current = candidate;
                return;
            }
        }
    }
}
