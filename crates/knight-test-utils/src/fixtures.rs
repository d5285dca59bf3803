//! Known boards and walks.
//!
//! - [`FIVE_BY_FIVE_ROWS`]: `SpiralBoard::build(4)` cell by cell.
//! - [`FIVE_BY_FIVE_WALK`]: the walk on it from the center, checked by hand.
//! - `REFERENCE_*`: the size-100 board, where the walk ends on 2084.

use knight_board::SpiralBoard;
use knight_core::{CellValue, Coord};

/// Rows of the size-4 spiral board.
#[rustfmt::skip]
pub const FIVE_BY_FIVE_ROWS: [[CellValue; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 5, 4, 3, 0],
    [0, 6, 1, 2, 0],
    [0, 7, 8, 9, 10],
    [0, 0, 0, 0, 0],
];

/// Moves of the walk from `(2, 2)` on the size-4 board.
pub const FIVE_BY_FIVE_WALK: [Coord; 9] = [
    Coord::new(3, 4),
    Coord::new(1, 3),
    Coord::new(2, 1),
    Coord::new(3, 3),
    Coord::new(1, 2),
    Coord::new(3, 1),
    Coord::new(2, 3),
    Coord::new(1, 1),
    Coord::new(3, 2),
];

/// Values under [`FIVE_BY_FIVE_WALK`]: every number but the start.
pub const FIVE_BY_FIVE_VALUES: [CellValue; 9] = [10, 3, 6, 9, 4, 7, 2, 5, 8];

/// Board size of the classic puzzle.
pub const REFERENCE_SIZE: u32 = 100;
/// Moves before the knight is trapped on the reference board.
pub const REFERENCE_MOVES: usize = 2015;
/// Square the knight is trapped on.
pub const REFERENCE_TRAPPED_VALUE: CellValue = 2084;
/// Cell of [`REFERENCE_TRAPPED_VALUE`] on the reference board.
pub const REFERENCE_TRAPPED_AT: Coord = Coord::new(27, 60);
/// Largest square visited on the way.
pub const REFERENCE_HIGHEST_VALUE: CellValue = 3199;

/// The size-4 board rebuilt from [`FIVE_BY_FIVE_ROWS`].
pub fn five_by_five_board() -> SpiralBoard {
    let rows = FIVE_BY_FIVE_ROWS.iter().map(|r| r.to_vec()).collect();
    SpiralBoard::from_rows(rows).expect("fixture rows are square")
}

/// The reference board.
pub fn reference_board() -> SpiralBoard {
    SpiralBoard::build(REFERENCE_SIZE).expect("reference size is valid")
}
