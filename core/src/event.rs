use serde::{Deserialize, Serialize};

use crate::*;

/// Notifications queued by [`GameEngine`] for the presentation side, in the order they happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TileRevealed { index: TileIndex, adjacent_mines: u8 },
    GameLost { index: TileIndex },
    GameWon,
    ScoreChanged { score: Score },
    MarkToggled { index: TileIndex, mark: Mark },
    MinesVisibilityChanged { visible: bool },
    BoardReset(BoardSnapshot),
}
