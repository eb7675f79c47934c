use core::fmt::Write as _;

use blasting_core::{BoardSnapshot, TileView};

fn tile_char(tile: &TileView) -> char {
    if tile.visited {
        match tile.adjacent_mines {
            Some(0) | None => ' ',
            Some(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    } else if tile.is_exposed_mine() {
        '*'
    } else if tile.mark.is_flagged() {
        'F'
    } else {
        '.'
    }
}

/// Draws the board with column numbers on top and each row labelled by the index of its first tile.
pub fn render(snapshot: &BoardSnapshot) -> String {
    let side = usize::from(snapshot.side);
    let label_width = (side * side).saturating_sub(1).to_string().len();
    let mut s = String::new();

    let _ = write!(s, "{:>label_width$} |", "");
    for col in 0..side {
        let _ = write!(s, "{:>3}", col);
    }
    s.push('\n');
    let _ = writeln!(s, "{}", "-".repeat(label_width + 2 + side * 3));

    for (row, tiles) in snapshot.rows().enumerate() {
        let _ = write!(s, "{:>label_width$} |", row * side);
        for tile in tiles {
            let _ = write!(s, "{:>3}", tile_char(tile));
        }
        s.push('\n');
    }
    s
}

pub fn status_line(snapshot: &BoardSnapshot) -> String {
    format!(
        "Score: {}  Revealed: {}/{}  Mines: {}",
        snapshot.score,
        snapshot.revealed_count,
        usize::from(snapshot.side).pow(2) - usize::from(snapshot.mine_count),
        snapshot.mine_count
    )
}
