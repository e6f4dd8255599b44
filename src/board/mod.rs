//! Board data and queries: terrain cells, structures, adjacency.

pub mod adjacency;
pub mod map;
pub mod terrain;

pub use adjacency::is_adjacent;
pub use map::Board;
pub use terrain::{Structure, StructureType, Terrain, TerrainId, TerrainKind, TerrainType};
