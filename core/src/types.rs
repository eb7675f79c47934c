/// Board side length, also used for row and column positions.
pub type Side = u8;

/// Linear, row-major tile index: `row * side + col`.
pub type TileIndex = u16;

/// Count type used for tile totals, mine counts and revealed counts.
pub type TileCount = u16;

/// Accumulated player score.
pub type Score = u32;

/// Grid position `(row, col)`.
pub type Position = (Side, Side);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of tiles on a `side` x `side` board.
pub const fn tile_total(side: Side) -> TileCount {
    let side = side as TileCount;
    side.saturating_mul(side)
}

/// Mines are always a quarter of the board, rounded down.
pub const fn mine_count_for(side: Side) -> TileCount {
    tile_total(side) / 4
}

/// Splits a linear index into `(row, col)`. `side` must be non-zero.
pub const fn position_of(index: TileIndex, side: Side) -> Position {
    let side = side as TileIndex;
    ((index / side) as Side, (index % side) as Side)
}

pub const fn index_of((row, col): Position, side: Side) -> TileIndex {
    (row as TileIndex) * (side as TileIndex) + (col as TileIndex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mine_density_is_a_quarter_rounded_down() {
        assert_eq!(mine_count_for(1), 0);
        assert_eq!(mine_count_for(2), 1);
        assert_eq!(mine_count_for(3), 2);
        assert_eq!(mine_count_for(5), 6);
        assert_eq!(mine_count_for(10), 25);
        assert_eq!(mine_count_for(Side::MAX), 16256);
    }

    #[test]
    fn linear_index_is_row_major() {
        assert_eq!(position_of(0, 3), (0, 0));
        assert_eq!(position_of(5, 3), (1, 2));
        assert_eq!(position_of(8, 3), (2, 2));
        assert_eq!(index_of((2, 1), 3), 7);
        assert_eq!(index_of(position_of(64, 10), 10), 64);
    }
}
