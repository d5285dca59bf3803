//! Benchmark profiles for the trapped knight.
//!
//! - [`reference_profile`]: the classic 101x101 board walked from square 1
//! - [`stress_profile`]: a 317x317 board (~100K cells)
//! - [`survey_starts`]: the first `count` squares of a board, in value order

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use knight::prelude::*;

/// The classic tour: size 100, start at the center.
pub fn reference_profile() -> TourConfig {
    TourConfig::with_size(100)
}

/// Same walk at roughly 10x the cell count.
pub fn stress_profile() -> TourConfig {
    TourConfig::with_size(316)
}

/// Coordinates of squares `1..=count`, stopping early if the board runs out.
pub fn survey_starts(board: &SpiralBoard, count: u32) -> Vec<Coord> {
    (1..=count).map_while(|v| board.position_of(v)).collect()
}
