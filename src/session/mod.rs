//! Game session facade and status reporter.
//!
//! The session owns one engine and one state, resolves the raw
//! identifiers callers hand in (terrain ids, wheel indices, track
//! names), and reports each action as a success flag plus one
//! human-readable status line. It never re-derives failure reasons:
//! the engine's outcome code is the single source of truth, rendered
//! to exactly one message per code.
//!
//! Sessions are single-threaded; wrap one in a mutex or feed it from a
//! single writer if several callers share it.

pub mod setup;

use tracing::warn;

use crate::board::{TerrainId, TerrainType};
use crate::core::{GameState, Outcome, PlayerId};
use crate::cult::CultTrackId;
use crate::engine::Resolver;

pub use setup::{SessionBuilder, SetupError};

/// One running game.
#[derive(Clone, Debug)]
pub struct Session {
    resolver: Resolver,
    state: GameState,
    status: String,
}

impl Session {
    /// Start building a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn from_parts(resolver: Resolver, state: GameState) -> Self {
        Self {
            resolver,
            state,
            status: "game started".to_string(),
        }
    }

    // === Actions, by raw identifier ===

    /// Terraform terrain `terrain` to the type at `wheel_index`.
    pub fn transform_terrain(&mut self, terrain: u16, wheel_index: usize) -> bool {
        let Some(to) = TerrainType::from_index(wheel_index) else {
            self.status = format!("no terrain type with index {wheel_index}");
            warn!(wheel_index, "unknown terrain type index");
            return false;
        };
        let outcome =
            self.resolver
                .transform_terrain(&mut self.state, TerrainId::new(terrain), to);
        self.report(outcome)
    }

    /// Build a dwelling on terrain `terrain`.
    pub fn build_dwelling(&mut self, terrain: u16) -> bool {
        let outcome = self
            .resolver
            .build_dwelling(&mut self.state, TerrainId::new(terrain));
        self.report(outcome)
    }

    /// Raise the current player's shipping level.
    pub fn improve_shipping(&mut self) -> bool {
        let outcome = self.resolver.improve_shipping(&mut self.state);
        self.report(outcome)
    }

    /// Improve the current player's terraforming rate.
    pub fn improve_terraforming(&mut self) -> bool {
        let outcome = self.resolver.improve_terraforming(&mut self.state);
        self.report(outcome)
    }

    /// Upgrade the structure on terrain `terrain` to its next tier.
    pub fn upgrade_structure(&mut self, terrain: u16) -> bool {
        let outcome = self
            .resolver
            .upgrade_structure(&mut self.state, TerrainId::new(terrain));
        self.report(outcome)
    }

    /// Send a priest to the cult track named `track`.
    pub fn send_priest_to_cult(&mut self, track: &str) -> bool {
        let Some(track_id) = CultTrackId::from_name(track) else {
            self.status = format!("no cult track named '{track}'");
            warn!(track, "unknown cult track name");
            return false;
        };
        let outcome = self.resolver.send_priest(&mut self.state, track_id);
        self.report(outcome)
    }

    /// Pass for the rest of the round.
    pub fn pass(&mut self) -> bool {
        let outcome = self.resolver.pass(&mut self.state);
        let ok = self.report(outcome);
        if self.state.tracker.is_finished() {
            self.status = "game over".to_string();
        }
        ok
    }

    /// Rotate to the next player who has not passed.
    pub fn advance_player(&mut self) {
        self.resolver.advance_player(&mut self.state);
    }

    // === Queries ===

    /// The latest status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Has the last round been played out?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.tracker.is_finished()
    }

    /// Read access to the full session state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine this session resolves with.
    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    fn report(&mut self, outcome: Outcome) -> bool {
        self.status = outcome.message().to_string();
        outcome.is_success()
    }
}
