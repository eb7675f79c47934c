use thiserror::Error;

use crate::{GamePhase, TileCount, TileIndex};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Tile index {index} is out of bounds for a board of {total} tiles")]
    IndexOutOfBounds { index: TileIndex, total: TileCount },
    #[error("Command not accepted while the game is {0:?}")]
    IllegalTransition(GamePhase),
}

pub type Result<T> = core::result::Result<T, GameError>;
