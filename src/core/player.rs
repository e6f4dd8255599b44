//! Player identification, per-player storage, and the player record.
//!
//! ## PlayerId
//!
//! Type-safe 0-based player index. Sessions support 2-7 players (one
//! faction per terrain type).
//!
//! ## PlayerMap
//!
//! Per-player data backed by `Vec` for O(1) access, indexable by
//! `PlayerId`. Used for player records and cult-track marker positions.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::faction::Faction;
use super::resources::Resources;
use crate::board::TerrainType;

/// Player identifier. Player indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's session-lifetime record.
///
/// Mutated only through the resource ledger and the action executor;
/// the board references players by id, never the other way around.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The owned faction. Fixes the native terrain type and the starting
    /// attributes below.
    pub faction: Faction,
    /// Resource pools.
    pub resources: Resources,
    /// Shipping track level, 0-3.
    pub shipping: u8,
    /// Workers paid per spade of terraforming. Lower is better; 1 is the
    /// best reachable rate.
    pub dig_rate: u8,
    /// Set when the player passes; cleared when the round rolls over.
    pub passed: bool,
}

impl Player {
    /// Create a player from a faction, taking the faction's starting
    /// attributes.
    #[must_use]
    pub fn new(faction: Faction) -> Self {
        let resources = faction.starting;
        let shipping = faction.shipping;
        let dig_rate = faction.dig_rate;
        Self {
            faction,
            resources,
            shipping,
            dig_rate,
            passed: false,
        }
    }

    /// The terrain type this player's faction builds on.
    #[must_use]
    pub fn native_terrain(&self) -> TerrainType {
        self.faction.native
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player, indexed by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new map with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
