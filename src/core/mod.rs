//! Core types: players, factions, resources, actions, configuration,
//! turn bookkeeping, RNG, and the session state.

pub mod action;
pub mod config;
pub mod faction;
pub mod player;
pub mod resources;
pub mod rng;
pub mod state;
pub mod turn;

pub use action::{Action, ActionRecord, Outcome};
pub use config::{GameConfig, ScoringTile};
pub use faction::Faction;
pub use player::{Player, PlayerId, PlayerMap};
pub use resources::{Cost, Income, Resources, Shortage};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
pub use turn::{Phase, TurnTracker};
