//! The four cult tracks and per-player marker positions.
//!
//! Advancing costs one priest per step-set (the resolution engine
//! consumes the priest) and moves the marker a fixed number of steps,
//! clamped at the track ceiling. A marker already at the ceiling blocks
//! further advancement.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// The four tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CultTrackId {
    Fire,
    Water,
    Earth,
    Air,
}

impl CultTrackId {
    /// All tracks, in board order.
    pub const ALL: [CultTrackId; 4] = [
        CultTrackId::Fire,
        CultTrackId::Water,
        CultTrackId::Earth,
        CultTrackId::Air,
    ];

    /// Board position of this track.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The track name callers use.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CultTrackId::Fire => "fire",
            CultTrackId::Water => "water",
            CultTrackId::Earth => "earth",
            CultTrackId::Air => "air",
        }
    }

    /// Case-insensitive lookup by track name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        CultTrackId::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for CultTrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One track's marker positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultTrack {
    id: CultTrackId,
    ceiling: u8,
    steps: u8,
    positions: PlayerMap<u8>,
}

impl CultTrack {
    /// A track with every marker at 0.
    #[must_use]
    pub fn new(id: CultTrackId, ceiling: u8, steps: u8, player_count: usize) -> Self {
        Self {
            id,
            ceiling,
            steps,
            positions: PlayerMap::with_value(player_count, 0),
        }
    }

    /// Which track this is.
    #[must_use]
    pub fn id(&self) -> CultTrackId {
        self.id
    }

    /// The position a marker cannot advance beyond.
    #[must_use]
    pub fn ceiling(&self) -> u8 {
        self.ceiling
    }

    /// A player's marker position.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> u8 {
        self.positions[player]
    }

    /// Can this player's marker still move?
    #[must_use]
    pub fn can_advance(&self, player: PlayerId) -> bool {
        self.positions[player] < self.ceiling
    }

    /// Move the marker one step-set, clamped at the ceiling. Returns
    /// `false` (and moves nothing) when the marker is already there.
    pub fn advance(&mut self, player: PlayerId) -> bool {
        if !self.can_advance(player) {
            return false;
        }
        let pos = &mut self.positions[player];
        *pos = (*pos + self.steps).min(self.ceiling);
        true
    }
}

/// All four tracks of one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultBoard {
    tracks: [CultTrack; 4],
}

impl CultBoard {
    /// A board with every marker at 0.
    #[must_use]
    pub fn new(player_count: usize, ceiling: u8, steps: u8) -> Self {
        Self {
            tracks: CultTrackId::ALL
                .map(|id| CultTrack::new(id, ceiling, steps, player_count)),
        }
    }

    /// Look a track up.
    #[must_use]
    pub fn track(&self, id: CultTrackId) -> &CultTrack {
        &self.tracks[id.index()]
    }

    /// Look a track up mutably.
    pub fn track_mut(&mut self, id: CultTrackId) -> &mut CultTrack {
        &mut self.tracks[id.index()]
    }
}
