//! # terra-rules
//!
//! A rules-enforcement and turn-progression engine for
//! territory-settlement board games: terraform terrain, build and
//! upgrade structures, improve shipping and terraforming tracks,
//! advance on cult tracks, pass.
//!
//! ## Design Principles
//!
//! 1. **Check-then-commit**: every action validates all of its
//!    preconditions before any state mutation. A rejected action
//!    returns an enumerated outcome code and changes nothing.
//!
//! 2. **Explicit sessions**: one [`session::Session`] per game, owning
//!    its state outright. No process-wide singletons; concurrent
//!    sessions never share players, boards, or trackers.
//!
//! 3. **Configuration over convention**: costs, income, scoring tiles,
//!    and the terrain distance function are data in
//!    [`core::GameConfig`], not code in the engine.
//!
//! 4. **Implicit round transitions**: rounds end when every player has
//!    passed; the pass counter is the only round-advance signal.
//!
//! ## Modules
//!
//! - `core`: players, factions, resources, actions, config, turn
//!   bookkeeping, RNG, session state
//! - `board`: terrain arena, the terrain-type wheel, adjacency oracle
//! - `cult`: the four cult tracks
//! - `ledger`: priced, atomic access to resource pools
//! - `engine`: the action resolution engine and executor
//! - `session`: facade mapping raw identifiers to actions and outcome
//!   codes to status lines

pub mod board;
pub mod core;
pub mod cult;
pub mod engine;
pub mod ledger;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Cost, Faction, GameConfig, GameRng, GameRngState, GameState, Income,
    Outcome, Phase, Player, PlayerId, PlayerMap, Resources, ScoringTile, Shortage, TurnTracker,
};

pub use crate::board::{
    is_adjacent, Board, Structure, StructureType, Terrain, TerrainId, TerrainKind, TerrainType,
};

pub use crate::cult::{CultBoard, CultTrack, CultTrackId};

pub use crate::engine::Resolver;

pub use crate::ledger::Ledger;

pub use crate::session::{Session, SessionBuilder, SetupError};
