//! Action executor: post-validation state mutations.
//!
//! Every function here assumes the resolution engine has already
//! validated the action; preconditions are only debug-asserted. Nothing
//! in this module touches resource pools — that is the ledger's job.

use crate::board::{Structure, StructureType, Terrain, TerrainType};
use crate::core::{Player, PlayerId};

/// Set a land cell's terrain type.
pub fn set_terrain_type(cell: &mut Terrain, to: TerrainType) {
    debug_assert!(cell.is_available(), "terraforming an unavailable cell");
    cell.kind = crate::board::TerrainKind::Land(to);
}

/// Place a dwelling for `owner` on an empty land cell.
pub fn place_dwelling(cell: &mut Terrain, owner: PlayerId) {
    debug_assert!(cell.is_available(), "building on an unavailable cell");
    cell.structure = Some(Structure {
        owner,
        tier: StructureType::Dwelling,
    });
}

/// Replace a cell's structure with `tier`. The old tier is destroyed,
/// not kept; a cell never carries two structures.
pub fn raise_structure(cell: &mut Terrain, tier: StructureType) {
    debug_assert!(cell.structure.is_some(), "upgrading an empty cell");
    if let Some(structure) = cell.structure.as_mut() {
        structure.tier = tier;
    }
}

/// Raise the shipping track one level.
pub fn raise_shipping(player: &mut Player) {
    player.shipping += 1;
}

/// Improve the workers-per-spade rate by one step.
pub fn improve_dig_rate(player: &mut Player) {
    debug_assert!(player.dig_rate > 1, "dig rate below best");
    player.dig_rate -= 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TerrainId;
    use crate::core::Faction;

    #[test]
    fn test_set_terrain_type() {
        let mut cell = Terrain::land(TerrainId::new(0), TerrainType::Plains);
        set_terrain_type(&mut cell, TerrainType::Swamp);
        assert_eq!(cell.terrain_type(), Some(TerrainType::Swamp));
        assert!(cell.structure.is_none());
    }

    #[test]
    fn test_place_and_raise_structure() {
        let mut cell = Terrain::land(TerrainId::new(0), TerrainType::Plains);
        let owner = PlayerId::new(1);

        place_dwelling(&mut cell, owner);
        let s = cell.structure.unwrap();
        assert_eq!(s.owner, owner);
        assert_eq!(s.tier, StructureType::Dwelling);

        raise_structure(&mut cell, StructureType::TradingHouse);
        let s = cell.structure.unwrap();
        assert_eq!(s.owner, owner);
        assert_eq!(s.tier, StructureType::TradingHouse);
    }

    #[test]
    fn test_track_mutations() {
        let mut player = Player::new(Faction::for_terrain(TerrainType::Plains));

        raise_shipping(&mut player);
        assert_eq!(player.shipping, 1);

        let before = player.dig_rate;
        improve_dig_rate(&mut player);
        assert_eq!(player.dig_rate, before - 1);
    }
}
