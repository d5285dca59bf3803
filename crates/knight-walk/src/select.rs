//! Candidate generation and the lowest-number selection rule.

use crate::visited::VisitedSet;
use knight_board::{knight_moves, SpiralBoard};
use knight_core::{CellValue, Coord, UNNUMBERED};
use smallvec::SmallVec;

/// Destinations still open to the knight, as `(cell, value)`.
pub type Candidates = SmallVec<[(Coord, CellValue); 8]>;

/// Knight destinations from `from` that are on the board, numbered, and
/// not yet visited, in knight-offset order.
///
/// Unnumbered cells are never candidates: the knight only lands on
/// squares the spiral reached.
pub fn candidates(board: &SpiralBoard, from: Coord, visited: &VisitedSet) -> Candidates {
    knight_moves(board, from)
        .into_iter()
        .filter_map(|to| board.get(to).map(|value| (to, value)))
        .filter(|&(_, value)| value != UNNUMBERED && !visited.contains(value))
        .collect()
}

/// The candidate with the smallest value.
///
/// Spiral values are unique, so there is never a tie on a built board.
/// On a hand-made board with repeated values the first in offset order
/// wins.
pub fn select(candidates: &[(Coord, CellValue)]) -> Option<(Coord, CellValue)> {
    candidates.iter().copied().min_by_key(|&(_, value)| value)
}
