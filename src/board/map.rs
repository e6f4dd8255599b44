//! The board: an arena of terrain records indexed by id.
//!
//! Cells reference each other and their occupants by id only; there are
//! no back-pointers from the board into player records.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::terrain::{StructureType, Terrain, TerrainId};
use crate::core::PlayerId;

/// All terrain cells of one session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: FxHashMap<TerrainId, Terrain>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, replacing any previous cell with the same id.
    pub fn insert(&mut self, terrain: Terrain) {
        self.cells.insert(terrain.id, terrain);
    }

    /// Look a cell up by id.
    #[must_use]
    pub fn get(&self, id: TerrainId) -> Option<&Terrain> {
        self.cells.get(&id)
    }

    /// Look a cell up mutably.
    pub fn get_mut(&mut self, id: TerrainId) -> Option<&mut Terrain> {
        self.cells.get_mut(&id)
    }

    /// Does a cell with this id exist?
    #[must_use]
    pub fn contains(&self, id: TerrainId) -> bool {
        self.cells.contains_key(&id)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all cells in arbitrary order.
    pub fn terrains(&self) -> impl Iterator<Item = &Terrain> {
        self.cells.values()
    }

    /// The structure tiers a player currently owns, one entry per
    /// occupied cell, in arbitrary order.
    pub fn structures_of(&self, player: PlayerId) -> impl Iterator<Item = StructureType> + '_ {
        self.cells.values().filter_map(move |t| {
            t.structure
                .filter(|s| s.owner == player)
                .map(|s| s.tier)
        })
    }
}
