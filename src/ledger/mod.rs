//! Resource ledger: affordability checks and atomic charge/credit.
//!
//! The ledger owns the rule tables and is the only component that moves
//! resources in or out of a player's pools. Every charge is
//! all-or-nothing: the pools are checked in full before anything is
//! deducted, so a rejected charge leaves the player byte-for-byte
//! unchanged.

use crate::board::{StructureType, TerrainType};
use crate::core::{Cost, GameConfig, Outcome, Player};

/// Priced access to player resource pools.
#[derive(Clone, Debug)]
pub struct Ledger {
    config: GameConfig,
}

impl Ledger {
    /// A ledger over the given rule tables.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// The rule tables.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Terraforming ===

    /// What terraforming between two types costs this player: the wheel
    /// distance in spades, each spade priced at the player's current
    /// workers-per-spade rate.
    #[must_use]
    pub fn spade_cost(&self, player: &Player, from: TerrainType, to: TerrainType) -> Cost {
        Cost::workers(u32::from(from.distance(to)) * u32::from(player.dig_rate))
    }

    /// Can the player pay for this terraform?
    #[must_use]
    pub fn can_afford_spades(&self, player: &Player, from: TerrainType, to: TerrainType) -> bool {
        player.resources.can_afford(&self.spade_cost(player, from, to))
    }

    /// Deduct the terraform cost. `false` (and no deduction) when the
    /// player cannot cover it.
    pub fn charge_spades(&self, player: &mut Player, from: TerrainType, to: TerrainType) -> bool {
        let cost = self.spade_cost(player, from, to);
        player.resources.charge(&cost).is_ok()
    }

    // === Structures ===

    /// Deduct the build/upgrade cost of a tier. On a short pool nothing
    /// is deducted and the shortage names the outcome.
    pub fn charge_structure(&self, player: &mut Player, tier: StructureType) -> Outcome {
        match player.resources.charge(&self.config.structure_cost(tier)) {
            Ok(()) => Outcome::Success,
            Err(short) => short.into(),
        }
    }

    /// Credit the income a tier yields when built or upgraded into.
    pub fn credit_structure_income(&self, player: &mut Player, tier: StructureType) {
        player.resources.credit(&self.config.structure_income(tier));
    }

    /// Credit the scoring-tile build bonus for a tier built in `round`,
    /// if that round's tile rewards the tier.
    pub fn credit_build_bonus(&self, player: &mut Player, round: u8, tier: StructureType) {
        if let Some(tile) = self.config.scoring_tile(round) {
            if tile.structure == tier {
                player.resources.victory_points += tile.build_points;
            }
        }
    }

    // === Track improvements ===

    /// Deduct the shipping-level cost.
    pub fn charge_shipping(&self, player: &mut Player) -> Outcome {
        match player.resources.charge(&self.config.shipping_cost) {
            Ok(()) => Outcome::Success,
            Err(short) => short.into(),
        }
    }

    /// Credit the income of a gained shipping level.
    pub fn credit_shipping_income(&self, player: &mut Player) {
        player.resources.credit(&self.config.shipping_income);
    }

    /// Deduct the terraforming-improvement cost.
    pub fn charge_improvement(&self, player: &mut Player) -> Outcome {
        match player.resources.charge(&self.config.dig_cost) {
            Ok(()) => Outcome::Success,
            Err(short) => short.into(),
        }
    }

    /// Credit the income of an improved workers-per-spade rate.
    pub fn credit_improvement_income(&self, player: &mut Player) {
        player.resources.credit(&self.config.dig_income);
    }

    // === End of round ===

    /// Credit the round's scoring-tile points for every owned structure
    /// the tile rewards.
    pub fn credit_round_end_bonus(
        &self,
        player: &mut Player,
        round: u8,
        owned: &[StructureType],
    ) {
        if let Some(tile) = self.config.scoring_tile(round) {
            let matching = owned.iter().filter(|&&t| t == tile.structure).count() as u32;
            player.resources.victory_points += tile.pass_points * matching;
        }
    }

    /// Credit the standing income of every owned structure.
    pub fn credit_structures_income(&self, player: &mut Player, owned: &[StructureType]) {
        for &tier in owned {
            player.resources.credit(&self.config.structure_income(tier));
        }
    }
}
