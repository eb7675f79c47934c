use rand::prelude::*;
use rand::rngs::StdRng;

use super::*;

/// Places mines by drawing uniformly random tile indices and rejecting the ones already taken.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R = StdRng> {
    rng: R,
}

impl RandomBoardGenerator<StdRng> {
    /// Unseeded: every game gets a different layout.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible layouts, for tests and replays.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self, side: Side, mine_count: TileCount) -> Result<Board> {
        validate_request(side, mine_count)?;

        let mut board = Board::empty(side)?;
        let total_tiles = board.total_tiles();
        let mut draws: u32 = 0;
        let mut rejected: u32 = 0;

        while board.mine_count() < mine_count {
            let index = self.rng.random_range(0..total_tiles);
            draws += 1;
            if !board.place_mine(index) {
                rejected += 1;
            }
        }

        log::debug!(
            "Generated {}x{} board with {} mines after {} draws, {} rejected",
            side,
            side,
            mine_count,
            draws,
            rejected
        );

        // double check mine count
        if board.mine_count() != mine_count {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                mine_count
            );
        }
        Ok(board)
    }
}
