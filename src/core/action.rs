//! Actions, outcome codes, and the attempt history.
//!
//! Every request against the resolution engine is one of seven
//! [`Action`] kinds. Resolution returns an [`Outcome`]: code 0 for
//! success, a positive code naming the exact precondition that failed.
//! Failures are ordinary values, never panics, and never leave partial
//! state behind.
//!
//! Each attempt (successful or not) is appended to the session history
//! as an [`ActionRecord`] for replay and debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::resources::Shortage;
use crate::board::{TerrainId, TerrainType};
use crate::cult::CultTrackId;

/// Result of resolving an action. Codes are stable and caller-visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 0 — the action was applied.
    Success,
    /// 1 — insufficient coins.
    ShortCoins,
    /// 2 — insufficient workers.
    ShortWorkers,
    /// 3 — insufficient priests.
    ShortPriests,
    /// 4 — terrain missing, occupied, river, or wrong type.
    TerrainBlocked,
    /// 5 — terrain not adjacent to the player's network.
    NotAdjacent,
    /// 6 — improvement or upgrade limit already reached.
    LimitReached,
    /// 7 — cult track cannot advance (ceiling reached).
    CultBlocked,
}

impl Outcome {
    /// The stable numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::ShortCoins => 1,
            Outcome::ShortWorkers => 2,
            Outcome::ShortPriests => 3,
            Outcome::TerrainBlocked => 4,
            Outcome::NotAdjacent => 5,
            Outcome::LimitReached => 6,
            Outcome::CultBlocked => 7,
        }
    }

    /// Did the action apply?
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// One status message per code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Success => "action completed",
            Outcome::ShortCoins => "not enough coins",
            Outcome::ShortWorkers => "not enough workers",
            Outcome::ShortPriests => "not enough priests",
            Outcome::TerrainBlocked => "terrain is unavailable",
            Outcome::NotAdjacent => "terrain is not adjacent to your network",
            Outcome::LimitReached => "improvement limit reached",
            Outcome::CultBlocked => "cult track cannot advance further",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<Shortage> for Outcome {
    fn from(short: Shortage) -> Self {
        match short {
            Shortage::Coins => Outcome::ShortCoins,
            Shortage::Workers => Outcome::ShortWorkers,
            Shortage::Priests => Outcome::ShortPriests,
        }
    }
}

/// A requested action, fully resolved to domain identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Change a terrain's type. Places no structure.
    Transform { terrain: TerrainId, to: TerrainType },
    /// Place a dwelling on the player's native terrain.
    BuildDwelling { terrain: TerrainId },
    /// Raise the shipping track by one level.
    ImproveShipping,
    /// Lower the workers-per-spade rate by one.
    ImproveTerraforming,
    /// Replace a structure with its next tier.
    UpgradeStructure { terrain: TerrainId },
    /// Spend a priest to advance on a cult track.
    SendPriest { track: CultTrackId },
    /// End participation in the current round.
    Pass,
}

/// One resolved attempt, as kept in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player the action was resolved for.
    pub player: PlayerId,
    /// Reported round index at resolution time (-1 setup, 0-5 rounds,
    /// 6 finished).
    pub round: i8,
    /// The requested action.
    pub action: Action,
    /// How it resolved.
    pub outcome: Outcome,
}
