//! Knight move generation with the bounds filter applied.

use crate::board::SpiralBoard;
use knight_core::{Coord, KNIGHT_OFFSETS};
use smallvec::SmallVec;

/// In-bounds knight destinations from `from`, in [`KNIGHT_OFFSETS`] order.
///
/// Offsets that leave `[0, size] x [0, size]` on either axis are dropped
/// here, so callers never read outside the board.
pub fn knight_moves(board: &SpiralBoard, from: Coord) -> SmallVec<[Coord; 8]> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&off| from.checked_add(off))
        .filter(|&to| board.contains(to))
        .collect()
}
