//! Terrain cells, the terrain-type wheel, and structures.
//!
//! ## The wheel
//!
//! The seven land terrain types form an ordered cycle. Terraforming
//! effort (spades) between two types is the cyclic distance between them,
//! kept as a lookup table rather than arithmetic so the pricing stays
//! data. River cells sit outside the wheel: they cannot be terraformed or
//! built on, and exist only to carry shipping adjacency.
//!
//! ## Structures
//!
//! A structure occupies exactly one terrain and belongs to exactly one
//! player, referenced by id. Upgrading replaces the tier in place; there
//! is never more than one structure per cell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Stable identifier of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerrainId(pub u16);

impl TerrainId {
    /// Create a new terrain ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TerrainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Terrain({})", self.0)
    }
}

/// The seven land terrain types, in wheel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    Plains,
    Swamp,
    Lake,
    Forest,
    Mountain,
    Wasteland,
    Desert,
}

/// Spade distance between wheel positions: `min(|a-b|, 7-|a-b|)`.
const SPADE_DISTANCE: [[u8; TerrainType::COUNT]; TerrainType::COUNT] = [
    [0, 1, 2, 3, 3, 2, 1],
    [1, 0, 1, 2, 3, 3, 2],
    [2, 1, 0, 1, 2, 3, 3],
    [3, 2, 1, 0, 1, 2, 3],
    [3, 3, 2, 1, 0, 1, 2],
    [2, 3, 3, 2, 1, 0, 1],
    [1, 2, 3, 3, 2, 1, 0],
];

impl TerrainType {
    /// Number of land terrain types.
    pub const COUNT: usize = 7;

    /// All types in wheel order. The wheel index doubles as the external
    /// terrain-type identifier callers hand to the session facade.
    pub const WHEEL: [TerrainType; TerrainType::COUNT] = [
        TerrainType::Plains,
        TerrainType::Swamp,
        TerrainType::Lake,
        TerrainType::Forest,
        TerrainType::Mountain,
        TerrainType::Wasteland,
        TerrainType::Desert,
    ];

    /// Position on the wheel.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a type up by wheel index. `None` for indices past the wheel.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::WHEEL.get(index).copied()
    }

    /// Spades needed to terraform from `self` to `to`.
    #[must_use]
    pub fn distance(self, to: TerrainType) -> u8 {
        SPADE_DISTANCE[self.index()][to.index()]
    }
}

impl std::fmt::Display for TerrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TerrainType::Plains => "plains",
            TerrainType::Swamp => "swamp",
            TerrainType::Lake => "lake",
            TerrainType::Forest => "forest",
            TerrainType::Mountain => "mountain",
            TerrainType::Wasteland => "wasteland",
            TerrainType::Desert => "desert",
        };
        f.write_str(name)
    }
}

/// What a board cell is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Buildable, terraformable land.
    Land(TerrainType),
    /// Water. Carries shipping adjacency, nothing else.
    River,
}

/// Structure tiers, lowest first. Each tier upgrades to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureType {
    Dwelling,
    TradingHouse,
    Temple,
    Sanctuary,
}

impl StructureType {
    /// Number of tiers.
    pub const COUNT: usize = 4;

    /// Tier position, lowest = 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The tier this one upgrades into. `None` at the top.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            StructureType::Dwelling => Some(StructureType::TradingHouse),
            StructureType::TradingHouse => Some(StructureType::Temple),
            StructureType::Temple => Some(StructureType::Sanctuary),
            StructureType::Sanctuary => None,
        }
    }
}

impl std::fmt::Display for StructureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StructureType::Dwelling => "dwelling",
            StructureType::TradingHouse => "trading house",
            StructureType::Temple => "temple",
            StructureType::Sanctuary => "sanctuary",
        };
        f.write_str(name)
    }
}

/// A player-owned structure occupying one cell.
///
/// The owner is a key, not a reference: the board never points back into
/// player records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub owner: PlayerId,
    pub tier: StructureType,
}

/// One board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    pub id: TerrainId,
    pub kind: TerrainKind,
    pub structure: Option<Structure>,
    /// Ids of directly adjacent cells. Boards are planar, so six is
    /// enough to keep the common case off the heap.
    pub neighbors: SmallVec<[TerrainId; 6]>,
}

impl Terrain {
    /// A land cell with no structure and no neighbors yet.
    #[must_use]
    pub fn land(id: TerrainId, terrain_type: TerrainType) -> Self {
        Self {
            id,
            kind: TerrainKind::Land(terrain_type),
            structure: None,
            neighbors: SmallVec::new(),
        }
    }

    /// A river cell.
    #[must_use]
    pub fn river(id: TerrainId) -> Self {
        Self {
            id,
            kind: TerrainKind::River,
            structure: None,
            neighbors: SmallVec::new(),
        }
    }

    /// The land type, `None` for rivers.
    #[must_use]
    pub fn terrain_type(&self) -> Option<TerrainType> {
        match self.kind {
            TerrainKind::Land(t) => Some(t),
            TerrainKind::River => None,
        }
    }

    /// Is this a river cell?
    #[must_use]
    pub fn is_river(&self) -> bool {
        matches!(self.kind, TerrainKind::River)
    }

    /// Available for building or terraforming: land with no structure.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.is_river() && self.structure.is_none()
    }
}
