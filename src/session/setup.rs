//! Session factory.
//!
//! Builds a playable session: a rectangular board crossed by a river
//! channel, one faction per player from the catalog, and the standard
//! rule tables. The terrain layout is deterministic by default and
//! seed-shuffled on request. Custom boards are validated before play.

use thiserror::Error;

use super::Session;
use crate::board::{Board, Terrain, TerrainId, TerrainType};
use crate::core::{Faction, GameConfig, GameRng, GameState, Player, PlayerMap};
use crate::engine::Resolver;

/// Board width of the standard layout.
const BOARD_WIDTH: u16 = 9;
/// Board height of the standard layout.
const BOARD_HEIGHT: u16 = 5;
/// Row occupied by the river channel.
const RIVER_ROW: u16 = 2;

/// Why a session could not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// Sessions support one faction per terrain type.
    #[error("player count {0} out of range (2-7)")]
    PlayerCount(usize),
    /// A neighbor list references a cell that does not exist.
    #[error("terrain {from} lists unknown neighbor {missing}")]
    DanglingNeighbor { from: TerrainId, missing: TerrainId },
    /// The scoring tiles do not cover every scored round.
    #[error("{tiles} scoring tiles cannot cover {rounds} rounds")]
    ScoringTiles { tiles: usize, rounds: u8 },
    /// Some player's faction has no available home terrain.
    #[error("no available {missing} terrain for faction {faction}")]
    MissingHomeTerrain { faction: String, missing: TerrainType },
}

/// Builder for a game session.
///
/// ```
/// use terra_rules::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .player_count(4)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(session.state().player_count(), 4);
/// ```
pub struct SessionBuilder {
    player_count: usize,
    seed: u64,
    shuffle_terrain: bool,
    config: GameConfig,
    board: Option<Board>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            player_count: 4,
            seed: 0,
            shuffle_terrain: false,
            config: GameConfig::standard(),
            board: None,
        }
    }
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players (2-7).
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Seed for the terrain shuffle.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Shuffle the land terrain types instead of laying them out in
    /// wheel order.
    #[must_use]
    pub fn shuffled_terrain(mut self) -> Self {
        self.shuffle_terrain = true;
        self
    }

    /// Use custom rule tables.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom board instead of the standard layout. The board is
    /// validated at build time.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the session.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range player counts, short scoring-tile tables,
    /// boards with dangling neighbor references, and boards missing an
    /// available home terrain for some faction.
    pub fn build(self) -> Result<Session, SetupError> {
        if !(2..=7).contains(&self.player_count) {
            return Err(SetupError::PlayerCount(self.player_count));
        }
        let tiles = self.config.scoring_tiles.len();
        if tiles < self.config.rounds as usize {
            return Err(SetupError::ScoringTiles {
                tiles,
                rounds: self.config.rounds,
            });
        }

        let mut rng = GameRng::new(self.seed);
        let board = match self.board {
            Some(board) => board,
            None => standard_board(&mut rng, self.shuffle_terrain),
        };
        validate_board(&board)?;

        let catalog = Faction::catalog();
        let players = PlayerMap::new(self.player_count, |p| {
            Player::new(catalog[p.index()].clone())
        });

        for (_, player) in players.iter() {
            let native = player.native_terrain();
            let has_home = board
                .terrains()
                .any(|t| t.is_available() && t.terrain_type() == Some(native));
            if !has_home {
                return Err(SetupError::MissingHomeTerrain {
                    faction: player.faction.name.clone(),
                    missing: native,
                });
            }
        }

        let state = GameState::new(board, players, &self.config, rng);
        Ok(Session::from_parts(Resolver::new(self.config), state))
    }
}

/// The standard layout: a `BOARD_WIDTH` x `BOARD_HEIGHT` grid, 4-way
/// connected, with row `RIVER_ROW` as a river channel. Land types cycle
/// through the wheel, or come from a shuffled bag.
fn standard_board(rng: &mut GameRng, shuffle: bool) -> Board {
    let cells = usize::from(BOARD_WIDTH * BOARD_HEIGHT);
    let mut types: Vec<TerrainType> = (0..cells)
        .map(|i| TerrainType::WHEEL[i % TerrainType::COUNT])
        .collect();
    if shuffle {
        rng.shuffle(&mut types);
    }

    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            let id = TerrainId::new(y * BOARD_WIDTH + x);
            let mut cell = if y == RIVER_ROW {
                Terrain::river(id)
            } else {
                Terrain::land(id, types[usize::from(id.raw())])
            };
            if x > 0 {
                cell.neighbors.push(TerrainId::new(id.raw() - 1));
            }
            if x + 1 < BOARD_WIDTH {
                cell.neighbors.push(TerrainId::new(id.raw() + 1));
            }
            if y > 0 {
                cell.neighbors.push(TerrainId::new(id.raw() - BOARD_WIDTH));
            }
            if y + 1 < BOARD_HEIGHT {
                cell.neighbors.push(TerrainId::new(id.raw() + BOARD_WIDTH));
            }
            board.insert(cell);
        }
    }
    board
}

/// Check every neighbor reference resolves.
fn validate_board(board: &Board) -> Result<(), SetupError> {
    for cell in board.terrains() {
        for &n in &cell.neighbors {
            if !board.contains(n) {
                return Err(SetupError::DanglingNeighbor {
                    from: cell.id,
                    missing: n,
                });
            }
        }
    }
    Ok(())
}
