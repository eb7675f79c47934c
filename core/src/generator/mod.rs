use crate::*;
pub use random::*;

mod random;

/// Produces a fresh board for each new game.
pub trait BoardGenerator {
    fn generate(&mut self, side: Side, mine_count: TileCount) -> Result<Board>;
}

/// Checks a generation request up front so that no partially built board is ever returned.
pub(crate) fn validate_request(side: Side, mine_count: TileCount) -> Result<()> {
    validate_side(side)?;
    if mine_count >= tile_total(side) {
        return Err(GameError::InvalidConfiguration(
            "mine count must be below the tile count",
        ));
    }
    Ok(())
}
