//! Spiral board invariant checks.
//!
//! Reused across the board test module. Every check panics with a
//! message naming the offending cell.

use crate::board::SpiralBoard;
use indexmap::IndexSet;
use knight_core::{CellValue, UNNUMBERED};

/// Assert that `1` appears exactly once, at the center.
pub fn assert_one_at_center(board: &SpiralBoard) {
    let center = board.center();
    assert_eq!(
        board.get(center),
        Some(1),
        "center {center} does not hold 1"
    );
    assert_eq!(board.position_of(1), Some(center));
    let ones = board.rows().flatten().filter(|&&v| v == 1).count();
    assert_eq!(ones, 1, "value 1 appears {ones} times");
}

/// Assert that the numbered values are exactly `1..=max`, each once.
pub fn assert_values_contiguous(board: &SpiralBoard) {
    let mut seen: IndexSet<CellValue> = IndexSet::new();
    for &v in board.rows().flatten() {
        if v != UNNUMBERED {
            assert!(seen.insert(v), "value {v} appears more than once");
        }
    }
    let max = board.max_value();
    assert_eq!(
        seen.len(),
        max as usize,
        "{} numbered cells but highest value is {max}",
        seen.len()
    );
    for v in 1..=max {
        assert!(seen.contains(&v), "value {v} missing");
    }
}

/// Assert that consecutive values sit on orthogonally adjacent cells.
pub fn assert_consecutive_values_adjacent(board: &SpiralBoard) {
    let cells = board.numbered_cells();
    for pair in cells.windows(2) {
        let (va, a) = pair[0];
        let (vb, b) = pair[1];
        let dist = (a.row - b.row).abs() + (a.col - b.col).abs();
        assert_eq!(dist, 1, "{va} at {a} and {vb} at {b} are not adjacent");
    }
}

/// Assert that the reverse index agrees with the cell values.
pub fn assert_position_index_consistent(board: &SpiralBoard) {
    for (value, at) in board.numbered_cells() {
        assert_eq!(board.get(at), Some(value), "index maps {value} to {at}");
    }
    assert_eq!(board.numbered_cells().len(), board.numbered_count());
}

/// Run all four checks on a built board.
pub fn run_full_compliance(board: &SpiralBoard) {
    assert_one_at_center(board);
    assert_values_contiguous(board);
    assert_consecutive_values_adjacent(board);
    assert_position_index_consistent(board);
}
