//! Action resolution engine.
//!
//! One operation per action kind. Each validates every precondition
//! against the current state, then commits cost and effect in one go:
//! a rejected action returns its outcome code with zero side effects,
//! an accepted one deducts, mutates, and credits income. No operation
//! advances the current player; rotation is the explicit
//! [`Resolver::advance_player`] call.
//!
//! All operations resolve for the player the turn tracker currently
//! points at, and every attempt is appended to the session history with
//! the round it was made in.

use tracing::{debug, info, trace};

use super::executor;
use crate::board::{self, StructureType, TerrainId, TerrainType};
use crate::core::{Action, ActionRecord, GameConfig, GameState, Outcome, Phase};
use crate::cult::CultTrackId;
use crate::ledger::Ledger;

/// The action resolution engine. Stateless apart from the rule tables;
/// all session state lives in the [`GameState`] passed to each call.
#[derive(Clone, Debug)]
pub struct Resolver {
    ledger: Ledger,
}

impl Resolver {
    /// An engine over the given rule tables.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            ledger: Ledger::new(config),
        }
    }

    /// The resource ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The rule tables.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.ledger.config()
    }

    // === The seven operations ===

    /// Change a terrain's type, paying workers for the wheel distance at
    /// the player's current rate. Places no structure.
    pub fn transform_terrain(
        &self,
        state: &mut GameState,
        terrain: TerrainId,
        to: TerrainType,
    ) -> Outcome {
        self.resolve(state, Action::Transform { terrain, to }, |rules, state| {
            let player_id = state.current_player();

            let Some(cell) = state.board.get(terrain) else {
                return Outcome::TerrainBlocked;
            };
            let Some(current) = cell.terrain_type() else {
                return Outcome::TerrainBlocked;
            };
            if !cell.is_available() || current == to {
                return Outcome::TerrainBlocked;
            }

            if !rules
                .ledger
                .charge_spades(&mut state.players[player_id], current, to)
            {
                return Outcome::ShortWorkers;
            }

            if let Some(cell) = state.board.get_mut(terrain) {
                executor::set_terrain_type(cell, to);
            }
            Outcome::Success
        })
    }

    /// Place a dwelling on the player's native terrain. During setup the
    /// adjacency and cost checks are bypassed; the last free placement
    /// starts round 0.
    pub fn build_dwelling(&self, state: &mut GameState, terrain: TerrainId) -> Outcome {
        self.resolve(state, Action::BuildDwelling { terrain }, |rules, state| {
            let player_id = state.current_player();
            let native = state.players[player_id].native_terrain();
            let in_setup = state.tracker.in_setup();

            let Some(cell) = state.board.get(terrain) else {
                return Outcome::TerrainBlocked;
            };
            if !cell.is_available() || cell.terrain_type() != Some(native) {
                return Outcome::TerrainBlocked;
            }

            if !in_setup {
                let shipping = state.players[player_id].shipping;
                if !board::is_adjacent(&state.board, player_id, terrain, shipping) {
                    return Outcome::NotAdjacent;
                }
                let paid = rules
                    .ledger
                    .charge_structure(&mut state.players[player_id], StructureType::Dwelling);
                if !paid.is_success() {
                    return paid;
                }
            }

            if let Some(cell) = state.board.get_mut(terrain) {
                executor::place_dwelling(cell, player_id);
            }
            rules
                .ledger
                .credit_structure_income(&mut state.players[player_id], StructureType::Dwelling);
            if let Phase::Round(round) = state.tracker.phase() {
                rules.ledger.credit_build_bonus(
                    &mut state.players[player_id],
                    round,
                    StructureType::Dwelling,
                );
            }

            if in_setup {
                state.tracker.note_setup_dwelling();
                if !state.tracker.in_setup() {
                    info!("setup complete, round 0 begins");
                }
            }
            Outcome::Success
        })
    }

    /// Raise the shipping track one level.
    pub fn improve_shipping(&self, state: &mut GameState) -> Outcome {
        self.resolve(state, Action::ImproveShipping, |rules, state| {
            let player_id = state.current_player();
            let player = &mut state.players[player_id];

            if player.shipping >= rules.config().shipping_limit {
                return Outcome::LimitReached;
            }
            let paid = rules.ledger.charge_shipping(player);
            if !paid.is_success() {
                return paid;
            }

            executor::raise_shipping(player);
            rules.ledger.credit_shipping_income(player);
            Outcome::Success
        })
    }

    /// Improve the workers-per-spade rate by one step.
    pub fn improve_terraforming(&self, state: &mut GameState) -> Outcome {
        self.resolve(state, Action::ImproveTerraforming, |rules, state| {
            let player_id = state.current_player();
            let player = &mut state.players[player_id];

            if player.dig_rate <= rules.config().dig_best {
                return Outcome::LimitReached;
            }
            let paid = rules.ledger.charge_improvement(player);
            if !paid.is_success() {
                return paid;
            }

            executor::improve_dig_rate(player);
            rules.ledger.credit_improvement_income(player);
            Outcome::Success
        })
    }

    /// Replace the current player's structure on `terrain` with its next
    /// tier.
    pub fn upgrade_structure(&self, state: &mut GameState, terrain: TerrainId) -> Outcome {
        self.resolve(state, Action::UpgradeStructure { terrain }, |rules, state| {
            let player_id = state.current_player();

            let Some(cell) = state.board.get(terrain) else {
                return Outcome::TerrainBlocked;
            };
            let Some(structure) = cell.structure else {
                return Outcome::TerrainBlocked;
            };
            if structure.owner != player_id {
                return Outcome::TerrainBlocked;
            }
            let Some(next) = structure.tier.next() else {
                return Outcome::LimitReached;
            };

            let paid = rules
                .ledger
                .charge_structure(&mut state.players[player_id], next);
            if !paid.is_success() {
                return paid;
            }

            if let Some(cell) = state.board.get_mut(terrain) {
                executor::raise_structure(cell, next);
            }
            rules
                .ledger
                .credit_structure_income(&mut state.players[player_id], next);
            if let Phase::Round(round) = state.tracker.phase() {
                rules
                    .ledger
                    .credit_build_bonus(&mut state.players[player_id], round, next);
            }
            Outcome::Success
        })
    }

    /// Spend one priest to advance on a cult track.
    pub fn send_priest(&self, state: &mut GameState, track: CultTrackId) -> Outcome {
        self.resolve(state, Action::SendPriest { track }, |_, state| {
            let player_id = state.current_player();

            if state.players[player_id].resources.priests == 0 {
                return Outcome::ShortPriests;
            }
            if !state.cults.track(track).can_advance(player_id) {
                return Outcome::CultBlocked;
            }

            state.players[player_id].resources.priests -= 1;
            let advanced = state.cults.track_mut(track).advance(player_id);
            debug_assert!(advanced);
            Outcome::Success
        })
    }

    /// End the current player's participation in the round. Credits
    /// end-of-round income first; the pass that completes the round
    /// advances it and clears every pass flag.
    pub fn pass(&self, state: &mut GameState) -> Outcome {
        self.resolve(state, Action::Pass, |rules, state| {
            let player_id = state.current_player();
            let owned: Vec<StructureType> = state.board.structures_of(player_id).collect();

            if let Phase::Round(round) = state.tracker.phase() {
                rules
                    .ledger
                    .credit_round_end_bonus(&mut state.players[player_id], round, &owned);
            }
            rules
                .ledger
                .credit_structures_income(&mut state.players[player_id], &owned);

            state.players[player_id].passed = true;
            if state.tracker.note_pass() {
                for (_, player) in state.players.iter_mut() {
                    player.passed = false;
                }
                info!(round = state.tracker.round_index(), "round advanced");
            }
            Outcome::Success
        })
    }

    // === Turn rotation ===

    /// Rotate to the next player who has not passed.
    pub fn advance_player(&self, state: &mut GameState) {
        state.tracker.advance_player(&state.players);
        trace!(player = %state.current_player(), "turn advanced");
    }

    /// Validate-then-commit wrapper: rejects everything once the session
    /// is finished, records the attempt with its pre-resolution round,
    /// and logs the outcome.
    fn resolve(
        &self,
        state: &mut GameState,
        action: Action,
        op: impl FnOnce(&Self, &mut GameState) -> Outcome,
    ) -> Outcome {
        let player = state.current_player();
        let round = state.tracker.round_index();

        let outcome = if state.tracker.is_finished() {
            Outcome::LimitReached
        } else {
            op(self, state)
        };

        state.record(ActionRecord {
            player,
            round,
            action,
            outcome,
        });

        if outcome.is_success() {
            debug!(player = %player, round, ?action, "action applied");
        } else {
            trace!(player = %player, round, ?action, code = outcome.code(), "action rejected");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Terrain};
    use crate::core::{Faction, GameRng, Player, PlayerMap};

    fn two_player_state(config: &GameConfig) -> GameState {
        let mut board = Board::new();
        board.insert(Terrain::land(TerrainId::new(0), TerrainType::Plains));

        let catalog = Faction::catalog();
        let players = PlayerMap::new(2, |p| Player::new(catalog[p.index()].clone()));
        GameState::new(board, players, config, GameRng::new(0))
    }

    #[test]
    fn test_attempts_are_recorded_with_pre_resolution_round() {
        let config = GameConfig::standard();
        let resolver = Resolver::new(config.clone());
        let mut state = two_player_state(&config);

        // Cell 0 is occupied after the first build, so the later
        // attempts are rejected; rejects are recorded too.
        for _ in 0..3 {
            resolver.build_dwelling(&mut state, TerrainId::new(0));
        }
        assert_eq!(state.history().len(), 3);
        assert!(state.history().iter().all(|r| r.round == -1));
        assert_eq!(state.history()[0].outcome, Outcome::Success);
        assert_eq!(state.history()[1].outcome, Outcome::TerrainBlocked);
    }

    #[test]
    fn test_finished_sessions_reject_every_operation() {
        let mut config = GameConfig::standard();
        config.setup_dwellings_per_player = 0;
        config.rounds = 1;
        let resolver = Resolver::new(config.clone());
        let mut state = two_player_state(&config);

        resolver.pass(&mut state);
        resolver.pass(&mut state);
        assert!(state.tracker.is_finished());

        assert_eq!(resolver.pass(&mut state), Outcome::LimitReached);
        assert_eq!(
            resolver.improve_shipping(&mut state),
            Outcome::LimitReached
        );
        assert_eq!(
            resolver.send_priest(&mut state, CultTrackId::Fire),
            Outcome::LimitReached
        );
    }
}
