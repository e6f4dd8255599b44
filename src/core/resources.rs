//! Resource pools, costs, and income.
//!
//! Every player owns one [`Resources`] pool. Actions are priced as a
//! [`Cost`] (the pools an action consumes) and rewarded as an [`Income`]
//! (the pools an action credits). Charging is all-or-nothing: a pool is
//! never driven negative, and a charge that cannot be covered in full
//! leaves every pool untouched.

use serde::{Deserialize, Serialize};

/// A player's resource pools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Workers, spent on terraforming and construction.
    pub workers: u32,
    /// Coins, spent on construction and track improvements.
    pub coins: u32,
    /// Priests, spent on cult advancement and track improvements.
    pub priests: u32,
    /// Power, credited by income only; never charged by the core actions.
    pub power: u32,
    /// Victory points.
    pub victory_points: u32,
}

impl Resources {
    /// An empty pool.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            workers: 0,
            coins: 0,
            priests: 0,
            power: 0,
            victory_points: 0,
        }
    }

    /// Check whether every pool covers the cost.
    #[must_use]
    pub fn can_afford(&self, cost: &Cost) -> bool {
        self.shortage(cost).is_none()
    }

    /// The first pool that cannot cover the cost, if any.
    ///
    /// Pools are checked in a fixed order (coins, workers, priests) so a
    /// multi-pool shortfall always reports the same cause.
    #[must_use]
    pub fn shortage(&self, cost: &Cost) -> Option<Shortage> {
        if self.coins < cost.coins {
            Some(Shortage::Coins)
        } else if self.workers < cost.workers {
            Some(Shortage::Workers)
        } else if self.priests < cost.priests {
            Some(Shortage::Priests)
        } else {
            None
        }
    }

    /// Deduct the cost from every pool, or deduct nothing.
    ///
    /// # Errors
    ///
    /// Returns the first short pool without mutating any pool.
    pub fn charge(&mut self, cost: &Cost) -> Result<(), Shortage> {
        if let Some(short) = self.shortage(cost) {
            return Err(short);
        }
        self.coins -= cost.coins;
        self.workers -= cost.workers;
        self.priests -= cost.priests;
        Ok(())
    }

    /// Credit the income to every pool.
    pub fn credit(&mut self, income: &Income) {
        self.workers += income.workers;
        self.coins += income.coins;
        self.priests += income.priests;
        self.power += income.power;
        self.victory_points += income.points;
    }
}

/// What an action consumes. Power and victory points are never charged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub workers: u32,
    pub coins: u32,
    pub priests: u32,
}

impl Cost {
    /// A zero cost.
    #[must_use]
    pub const fn free() -> Self {
        Self {
            workers: 0,
            coins: 0,
            priests: 0,
        }
    }

    /// A workers-only cost.
    #[must_use]
    pub const fn workers(workers: u32) -> Self {
        Self {
            workers,
            coins: 0,
            priests: 0,
        }
    }

    /// A priests-only cost.
    #[must_use]
    pub const fn priests(priests: u32) -> Self {
        Self {
            workers: 0,
            coins: 0,
            priests,
        }
    }

    /// A cost in several pools at once.
    #[must_use]
    pub const fn new(workers: u32, coins: u32, priests: u32) -> Self {
        Self {
            workers,
            coins,
            priests,
        }
    }
}

/// What an action credits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub workers: u32,
    pub coins: u32,
    pub priests: u32,
    pub power: u32,
    /// Victory points.
    pub points: u32,
}

impl Income {
    /// No income.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            workers: 0,
            coins: 0,
            priests: 0,
            power: 0,
            points: 0,
        }
    }

    /// A victory-point-only income.
    #[must_use]
    pub const fn points(points: u32) -> Self {
        Self {
            workers: 0,
            coins: 0,
            priests: 0,
            power: 0,
            points,
        }
    }
}

/// The pool a rejected charge was short on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shortage {
    Coins,
    Workers,
    Priests,
}
