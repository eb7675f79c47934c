use serde::{Deserialize, Serialize};

use crate::*;

/// Player annotation on an unrevealed tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    None,
    Flagged,
}

impl Mark {
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::None => Self::Flagged,
            Self::Flagged => Self::None,
        }
    }
}

/// One cell of the board.
///
/// `is_mine`, `adjacent_mines` and `neighbors` are settled while the board is generated; gameplay only ever
/// touches `visited` and `mark`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tile {
    is_mine: bool,
    adjacent_mines: u8,
    visited: bool,
    mark: Mark,
    neighbors: Neighbors,
}

impl Tile {
    pub(crate) fn new(neighbors: Neighbors) -> Self {
        Self {
            neighbors,
            ..Default::default()
        }
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    /// Only meaningful for safe tiles.
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn neighbors(&self) -> &[TileIndex] {
        &self.neighbors
    }

    pub(crate) fn set_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        self.adjacent_mines += 1;
    }

    pub(crate) fn set_visited(&mut self) {
        debug_assert!(!self.mark.is_flagged(), "flagged tiles are never revealed");
        self.visited = true;
    }

    /// Flips the mark, returning the new one. Callers must not do this on a visited tile.
    pub(crate) fn toggle_mark(&mut self) -> Mark {
        debug_assert!(!self.visited, "visited tiles cannot be marked");
        self.mark = self.mark.toggled();
        self.mark
    }

    pub fn view(&self, mines_visible: bool) -> TileView {
        TileView {
            mine: mines_visible.then_some(self.is_mine),
            visited: self.visited,
            mark: self.mark,
            adjacent_mines: self.visited.then_some(self.adjacent_mines),
        }
    }
}

/// What the presentation side is allowed to know about a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    /// `None` unless mines are currently shown.
    pub mine: Option<bool>,
    pub visited: bool,
    pub mark: Mark,
    /// `None` until the tile is visited.
    pub adjacent_mines: Option<u8>,
}

impl TileView {
    pub const fn is_exposed_mine(&self) -> bool {
        matches!(self.mine, Some(true))
    }
}
