use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use generator::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod adjacency;
mod engine;
mod error;
mod event;
mod generator;
mod snapshot;
mod tile;
mod types;

/// Runtime parameters of a game. Mine density is fixed, so the side length is the only board parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub side: Side,
    /// Report commands that the current phase does not accept as [`GameError::IllegalTransition`] instead of
    /// ignoring them.
    pub strict: bool,
}

impl GameConfig {
    pub const DEFAULT_SIDE: Side = 3;

    pub fn new(side: Side) -> Result<Self> {
        let config = Self {
            side,
            strict: false,
        };
        config.validate()?;
        Ok(config)
    }

    pub const fn with_strict(self, strict: bool) -> Self {
        Self { strict, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        validate_side(self.side)?;
        Ok(())
    }

    pub const fn total_tiles(&self) -> TileCount {
        tile_total(self.side)
    }

    pub const fn mine_count(&self) -> TileCount {
        mine_count_for(self.side)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side: Self::DEFAULT_SIDE,
            strict: false,
        }
    }
}

pub fn validate_side(side: Side) -> Result<Side> {
    if side == 0 {
        Err(GameError::InvalidConfiguration("board side must be at least 1"))
    } else {
        Ok(side)
    }
}

/// The square grid of tiles for one game, indexed by linear tile index.
///
/// Only serializable: a board is always built through [`Board::empty`] or [`Board::from_mine_indices`] so its
/// shape, side and neighbor counts agree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    tiles: Array2<Tile>,
    side: Side,
    mine_count: TileCount,
}

impl Board {
    /// A board of the given side with no mines, every tile already knowing its neighbors.
    pub fn empty(side: Side) -> Result<Self> {
        let side = validate_side(side)?;
        let dim = usize::from(side);
        let tiles = Array2::from_shape_fn((dim, dim), |(row, col)| {
            let index = index_of((row as Side, col as Side), side);
            Tile::new(neighbors(index, side))
        });

        Ok(Self {
            tiles,
            side,
            mine_count: 0,
        })
    }

    /// Builds a board with mines at exactly the given indices, duplicates counted once.
    pub fn from_mine_indices(side: Side, mines: &[TileIndex]) -> Result<Self> {
        let mut board = Self::empty(side)?;
        for &index in mines {
            let index = board.validate_index(index)?;
            board.place_mine(index);
        }

        if board.mine_count >= board.total_tiles() {
            return Err(GameError::InvalidConfiguration(
                "mine count must be below the tile count",
            ));
        }

        Ok(board)
    }

    /// Turns the tile into a mine and bumps the count of each of its neighbors. Returns `false` if it already was one.
    pub(crate) fn place_mine(&mut self, index: TileIndex) -> bool {
        let tile = self.tile_mut(index);
        if tile.is_mine() {
            return false;
        }
        tile.set_mine();
        self.mine_count += 1;

        for neighbor in iter_neighbors(index, self.side) {
            self.tile_mut(neighbor).add_adjacent_mine();
        }
        true
    }

    pub fn validate_index(&self, index: TileIndex) -> Result<TileIndex> {
        if index < self.total_tiles() {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfBounds {
                index,
                total: self.total_tiles(),
            })
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn total_tiles(&self) -> TileCount {
        tile_total(self.side)
    }

    pub fn mine_count(&self) -> TileCount {
        self.mine_count
    }

    pub fn safe_tile_count(&self) -> TileCount {
        self.total_tiles() - self.mine_count
    }

    pub fn tile(&self, index: TileIndex) -> Result<&Tile> {
        let index = self.validate_index(index)?;
        Ok(&self[index])
    }

    pub fn contains_mine(&self, index: TileIndex) -> bool {
        self[index].is_mine()
    }

    pub fn mine_indices(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.iter()
            .filter(|(_, tile)| tile.is_mine())
            .map(|(index, _)| index)
    }

    /// No tile has been revealed or flagged yet.
    pub fn is_fresh(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| !tile.is_visited() && !tile.mark().is_flagged())
    }

    /// Tiles in linear index order.
    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, &Tile)> {
        (0..).zip(self.tiles.iter())
    }

    pub(crate) fn tile_mut(&mut self, index: TileIndex) -> &mut Tile {
        &mut self.tiles[position_of(index, self.side).to_nd_index()]
    }
}

impl Index<TileIndex> for Board {
    type Output = Tile;

    fn index(&self, index: TileIndex) -> &Self::Output {
        &self.tiles[position_of(index, self.side).to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
