//! Game configuration: cost and income tables, limits, scoring tiles.
//!
//! Everything an action is priced or rewarded with is data here, not
//! code scattered through the engine. The standard tables follow the
//! classic settlement game; custom sessions may supply their own.

use serde::{Deserialize, Serialize};

use super::resources::{Cost, Income};
use crate::board::StructureType;

/// A round-bound bonus rule tied to one structure type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringTile {
    /// The structure type this tile rewards.
    pub structure: StructureType,
    /// Victory points credited when that type is built during the
    /// tile's round.
    pub build_points: u32,
    /// Victory points credited at round end (on pass) per owned
    /// structure of that type.
    pub pass_points: u32,
}

/// Session rule tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Free dwelling placements per player during setup.
    pub setup_dwellings_per_player: u8,
    /// Number of scored rounds.
    pub rounds: u8,
    /// Build/upgrade cost per tier, indexed by `StructureType`.
    pub structure_costs: [Cost; StructureType::COUNT],
    /// Income credited when a tier is built or upgraded into, and again
    /// per owned structure at each round end.
    pub structure_incomes: [Income; StructureType::COUNT],
    /// Cost of one shipping level.
    pub shipping_cost: Cost,
    /// Income credited per shipping level gained.
    pub shipping_income: Income,
    /// Highest reachable shipping level.
    pub shipping_limit: u8,
    /// Cost of improving the workers-per-spade rate by one.
    pub dig_cost: Cost,
    /// Income credited per rate improvement.
    pub dig_income: Income,
    /// Best reachable workers-per-spade rate.
    pub dig_best: u8,
    /// One tile per scored round.
    pub scoring_tiles: Vec<ScoringTile>,
    /// Cult track ceiling.
    pub cult_ceiling: u8,
    /// Marker steps per priest sent, clamped at the ceiling.
    pub cult_steps: u8,
}

impl GameConfig {
    /// The standard rule tables.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            setup_dwellings_per_player: 2,
            rounds: 6,
            structure_costs: [
                Cost::new(1, 2, 0), // dwelling
                Cost::new(2, 6, 0), // trading house
                Cost::new(2, 5, 0), // temple
                Cost::new(4, 6, 0), // sanctuary
            ],
            structure_incomes: [
                Income {
                    workers: 1,
                    ..Income::none()
                },
                Income {
                    coins: 2,
                    power: 1,
                    ..Income::none()
                },
                Income {
                    priests: 1,
                    ..Income::none()
                },
                Income {
                    priests: 1,
                    power: 2,
                    ..Income::none()
                },
            ],
            shipping_cost: Cost::new(0, 4, 1),
            shipping_income: Income::points(2),
            shipping_limit: 3,
            dig_cost: Cost::new(2, 5, 1),
            dig_income: Income::points(6),
            dig_best: 1,
            scoring_tiles: vec![
                ScoringTile {
                    structure: StructureType::Dwelling,
                    build_points: 2,
                    pass_points: 1,
                },
                ScoringTile {
                    structure: StructureType::TradingHouse,
                    build_points: 3,
                    pass_points: 1,
                },
                ScoringTile {
                    structure: StructureType::Temple,
                    build_points: 4,
                    pass_points: 1,
                },
                ScoringTile {
                    structure: StructureType::Sanctuary,
                    build_points: 5,
                    pass_points: 2,
                },
                ScoringTile {
                    structure: StructureType::Dwelling,
                    build_points: 2,
                    pass_points: 1,
                },
                ScoringTile {
                    structure: StructureType::TradingHouse,
                    build_points: 3,
                    pass_points: 1,
                },
            ],
            cult_ceiling: 10,
            cult_steps: 2,
        }
    }

    /// Cost of building or upgrading into a tier.
    #[must_use]
    pub fn structure_cost(&self, tier: StructureType) -> Cost {
        self.structure_costs[tier.index()]
    }

    /// Income a tier yields.
    #[must_use]
    pub fn structure_income(&self, tier: StructureType) -> Income {
        self.structure_incomes[tier.index()]
    }

    /// The scoring tile for a scored round, if the tables cover it.
    #[must_use]
    pub fn scoring_tile(&self, round: u8) -> Option<&ScoringTile> {
        self.scoring_tiles.get(round as usize)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
