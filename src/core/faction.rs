//! Faction catalog.
//!
//! A faction fixes a player's native terrain type and starting
//! attributes. The catalog carries one faction per terrain type; a
//! session assigns each player a distinct faction, so the board always
//! has a distinct home terrain per player.

use serde::{Deserialize, Serialize};

use super::resources::Resources;
use crate::board::TerrainType;

/// Per-player trait set: native terrain plus starting attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    pub name: String,
    /// The only terrain type this faction can build dwellings on.
    pub native: TerrainType,
    /// Starting resource pools.
    pub starting: Resources,
    /// Starting shipping level.
    pub shipping: u8,
    /// Starting workers-per-spade rate.
    pub dig_rate: u8,
}

impl Faction {
    fn new(name: &str, native: TerrainType) -> Self {
        Self {
            name: name.to_string(),
            native,
            starting: Resources {
                workers: 3,
                coins: 15,
                priests: 0,
                power: 5,
                victory_points: 20,
            },
            shipping: 0,
            dig_rate: 3,
        }
    }

    /// The full catalog, one faction per wheel type, in wheel order.
    #[must_use]
    pub fn catalog() -> Vec<Faction> {
        let mut mermaids = Faction::new("Mermaids", TerrainType::Lake);
        mermaids.shipping = 1;

        let mut dwarves = Faction::new("Dwarves", TerrainType::Mountain);
        dwarves.dig_rate = 2;

        let mut nomads = Faction::new("Nomads", TerrainType::Desert);
        nomads.starting.workers = 4;

        vec![
            Faction::new("Halflings", TerrainType::Plains),
            Faction::new("Alchemists", TerrainType::Swamp),
            mermaids,
            Faction::new("Witches", TerrainType::Forest),
            dwarves,
            Faction::new("Giants", TerrainType::Wasteland),
            nomads,
        ]
    }

    /// The catalog faction native to the given terrain.
    #[must_use]
    pub fn for_terrain(native: TerrainType) -> Faction {
        Faction::catalog()
            .into_iter()
            .find(|f| f.native == native)
            .unwrap_or_else(|| Faction::new("Settlers", native))
    }
}
