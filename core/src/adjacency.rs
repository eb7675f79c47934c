use smallvec::SmallVec;

use crate::*;

/// Neighbor list of a single tile, never longer than eight entries.
pub type Neighbors = SmallVec<[TileIndex; 8]>;

/// King-move offsets as `(row, col)` deltas, in the order neighbors are reported.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `position`, returning a value only when it remains on a `side` x `side` board.
fn apply_delta(position: Position, delta: (i8, i8), side: Side) -> Option<Position> {
    let (row, col) = position;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= side {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= side {
        return None;
    }

    Some((next_row, next_col))
}

/// Lazily yields the in-bounds neighbors of one tile.
///
/// An index outside the board (or a zero side) yields nothing.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Position,
    side: Side,
    step: u8,
}

impl NeighborIter {
    pub fn new(index: TileIndex, side: Side) -> Self {
        let in_bounds = side > 0 && index < tile_total(side);
        Self {
            center: if in_bounds {
                position_of(index, side)
            } else {
                (0, 0)
            },
            side,
            // an exhausted iterator for anything off the board
            step: if in_bounds {
                0
            } else {
                DISPLACEMENTS.len() as u8
            },
        }
    }
}

impl Iterator for NeighborIter {
    type Item = TileIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.step))?;
            self.step += 1;

            if let Some(position) = apply_delta(self.center, delta, self.side) {
                return Some(index_of(position, self.side));
            }
        }
    }
}

pub fn iter_neighbors(index: TileIndex, side: Side) -> NeighborIter {
    NeighborIter::new(index, side)
}

/// Valid neighbors of `index` on a `side` x `side` board, row by row.
///
/// Corner tiles have 3 neighbors, edge tiles 5 and interior tiles 8; a 1x1 board has none.
pub fn neighbors(index: TileIndex, side: Side) -> Neighbors {
    iter_neighbors(index, side).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(index: TileIndex, side: Side) -> Vec<TileIndex> {
        neighbors(index, side).into_vec()
    }

    #[test]
    fn corners_of_three_by_three() {
        assert_eq!(list(0, 3), [1, 3, 4]);
        assert_eq!(list(2, 3), [1, 4, 5]);
        assert_eq!(list(6, 3), [3, 4, 7]);
        assert_eq!(list(8, 3), [4, 5, 7]);
    }

    #[test]
    fn edges_of_three_by_three() {
        assert_eq!(list(1, 3), [0, 2, 3, 4, 5]);
        assert_eq!(list(3, 3), [0, 1, 4, 6, 7]);
        assert_eq!(list(5, 3), [1, 2, 4, 7, 8]);
        assert_eq!(list(7, 3), [3, 4, 5, 6, 8]);
    }

    #[test]
    fn interior_has_all_eight() {
        assert_eq!(list(4, 3), [0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(list(55, 10), [44, 45, 46, 54, 56, 64, 65, 66]);
    }

    #[test]
    fn single_tile_board_has_no_neighbors() {
        assert!(list(0, 1).is_empty());
    }

    #[test]
    fn out_of_range_center_yields_nothing() {
        assert!(list(9, 3).is_empty());
        assert!(list(0, 0).is_empty());
    }

    #[test]
    fn counts_by_position_on_every_board_size() {
        for side in 2..=12 {
            let last = side - 1;
            for index in 0..tile_total(side) {
                let (row, col) = position_of(index, side);
                let on_row_edge = row == 0 || row == last;
                let on_col_edge = col == 0 || col == last;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                let found = list(index, side);
                assert_eq!(found.len(), expected, "tile {index} on side {side}");

                let mut deduped = found.clone();
                deduped.sort_unstable();
                deduped.dedup();
                assert_eq!(deduped.len(), found.len());
                assert!(found.iter().all(|&n| n < tile_total(side) && n != index));
            }
        }
    }
}
