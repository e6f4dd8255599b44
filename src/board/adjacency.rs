//! Adjacency oracle.
//!
//! A candidate cell is adjacent to a player's network when a directly
//! neighboring cell carries one of the player's structures, or when one
//! of the player's structures can be reached by crossing at most
//! `shipping` consecutive river cells (shipping level 0 means no river
//! crossing at all).

use rustc_hash::FxHashSet;

use super::map::Board;
use super::terrain::TerrainId;
use crate::core::PlayerId;

/// Is `target` adjacent to `player`'s network on this board?
///
/// Unknown ids are simply not adjacent.
#[must_use]
pub fn is_adjacent(board: &Board, player: PlayerId, target: TerrainId, shipping: u8) -> bool {
    let Some(cell) = board.get(target) else {
        return false;
    };

    // Direct adjacency.
    for &n in &cell.neighbors {
        if occupied_by(board, n, player) {
            return true;
        }
    }

    if shipping == 0 {
        return false;
    }

    // Indirect adjacency: breadth-first over river cells, one ring per
    // shipping level.
    let mut visited: FxHashSet<TerrainId> = FxHashSet::default();
    let mut frontier: Vec<TerrainId> = cell
        .neighbors
        .iter()
        .copied()
        .filter(|&n| board.get(n).is_some_and(|t| t.is_river()))
        .collect();
    visited.extend(frontier.iter().copied());

    for _ in 0..shipping {
        let mut next = Vec::new();
        for river in frontier {
            let Some(river_cell) = board.get(river) else {
                continue;
            };
            for &n in &river_cell.neighbors {
                if occupied_by(board, n, player) {
                    return true;
                }
                if board.get(n).is_some_and(|t| t.is_river()) && visited.insert(n) {
                    next.push(n);
                }
            }
        }
        frontier = next;
    }

    false
}

fn occupied_by(board: &Board, id: TerrainId, player: PlayerId) -> bool {
    board
        .get(id)
        .and_then(|t| t.structure)
        .is_some_and(|s| s.owner == player)
}
