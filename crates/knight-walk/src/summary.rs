//! One-line digest of a finished walk.

use crate::path::Path;
use knight_board::SpiralBoard;
use knight_core::{CellValue, Coord, UNNUMBERED};
use std::fmt;

/// Headline numbers of a walk on a given board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkSummary {
    /// Start square.
    pub start: Coord,
    /// Value under the start square.
    pub start_value: CellValue,
    /// Number of moves made.
    pub moves: usize,
    /// Square the knight was trapped on.
    pub trapped_at: Coord,
    /// Value under the trapped square.
    pub trapped_value: CellValue,
    /// Largest value landed on, the start's included.
    pub highest_value: CellValue,
}

impl WalkSummary {
    /// Summarise `path` as walked on `board`.
    pub fn of(board: &SpiralBoard, path: &Path) -> Self {
        let value_at = |at: Coord| board.get(at).unwrap_or(UNNUMBERED);
        let start_value = value_at(path.start());
        let highest_value = path
            .values(board)
            .into_iter()
            .fold(start_value, CellValue::max);
        Self {
            start: path.start(),
            start_value,
            moves: path.len(),
            trapped_at: path.trapped_at(),
            trapped_value: value_at(path.trapped_at()),
            highest_value,
        }
    }
}

impl fmt::Display for WalkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from square {} at {}: trapped on square {} at {} after {} moves (highest square {})",
            self.start_value,
            self.start,
            self.trapped_value,
            self.trapped_at,
            self.moves,
            self.highest_value
        )
    }
}
