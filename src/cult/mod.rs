//! Cult tracks: bounded advancement scales consumed by spending priests.

pub mod track;

pub use track::{CultBoard, CultTrack, CultTrackId};
