use serde::{Deserialize, Serialize};

use crate::*;

/// Owned, read-only copy of everything the presentation side may show.
///
/// Snapshots never borrow from the engine, so they stay valid across `reset` and `resize`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub side: Side,
    pub mine_count: TileCount,
    pub phase: GamePhase,
    pub score: Score,
    pub revealed_count: TileCount,
    pub mines_visible: bool,
    /// Row-major, `side * side` entries.
    pub tiles: Vec<TileView>,
}

impl BoardSnapshot {
    pub fn from_engine<G>(engine: &GameEngine<G>) -> Self {
        let mines_visible = engine.mines_visible();
        let tiles = engine
            .board()
            .iter()
            .map(|(_, tile)| tile.view(mines_visible))
            .collect();

        Self {
            side: engine.board_size(),
            mine_count: engine.mine_count(),
            phase: engine.phase(),
            score: engine.score(),
            revealed_count: engine.revealed_count(),
            mines_visible,
            tiles,
        }
    }

    pub fn tile(&self, index: TileIndex) -> Option<&TileView> {
        self.tiles.get(usize::from(index))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileView]> {
        self.tiles.chunks(usize::from(self.side).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(mines: &[TileIndex]) -> GameEngine<RandomBoardGenerator> {
        let board = Board::from_mine_indices(3, mines).unwrap();
        GameEngine::from_board(board, RandomBoardGenerator::from_seed(0)).unwrap()
    }

    #[test]
    fn snapshot_matches_engine_state() {
        let mut engine = engine(&[8]);
        engine.reveal(5).unwrap();

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.side, 3);
        assert_eq!(snapshot.mine_count, 1);
        assert_eq!(snapshot.phase, GamePhase::InProgress);
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.revealed_count, 1);
        assert_eq!(snapshot.tile(5).unwrap().adjacent_mines, Some(1));
        assert_eq!(snapshot.tile(8).unwrap().mine, None);
        assert_eq!(snapshot.rows().count(), 3);
        assert!(snapshot.tile(9).is_none());
    }

    #[test]
    fn snapshot_exposes_mines_only_when_visible() {
        let mut engine = engine(&[8]);
        engine.toggle_mines_visible();

        let snapshot = engine.snapshot();
        assert!(snapshot.mines_visible);
        assert!(snapshot.tile(8).unwrap().is_exposed_mine());
        assert_eq!(snapshot.tile(0).unwrap().mine, Some(false));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = engine(&[3, 8]).snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, snapshot);
    }
}
