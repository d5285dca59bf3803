//! Test fixtures and walk assertions for trapped knight development.
//!
//! Provides the hand-checked 5×5 board and its walk, the known result of
//! the reference 101×101 board, and [`assert_valid_walk`], which checks a
//! path against the walk rules without re-running the walker.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::*;

use indexmap::IndexSet;
use knight_board::{knight_moves, SpiralBoard};
use knight_core::{CellValue, Coord, UNNUMBERED};

/// Assert that `moves` is a legal, complete greedy walk from `start`.
///
/// Checks, in order: every move is an on-board knight jump onto a
/// numbered cell; no value is landed on twice (the start's included);
/// each move took the lowest open value; the final square has no open
/// move left.
pub fn assert_valid_walk(board: &SpiralBoard, start: Coord, moves: &[Coord]) {
    let origin = board
        .get(start)
        .unwrap_or_else(|| panic!("start {start} is off the board"));
    let mut visited: IndexSet<CellValue> = IndexSet::new();
    visited.insert(origin);

    let mut at = start;
    for (i, &to) in moves.iter().enumerate() {
        let open = open_moves(board, at, &visited);
        let lowest = open.iter().map(|&(_, v)| v).min();
        let value = board
            .get(to)
            .unwrap_or_else(|| panic!("move {i} to {to} is off the board"));
        assert!(
            knight_moves(board, at).contains(&to),
            "move {i}: {at} -> {to} is not a knight jump"
        );
        assert_ne!(value, UNNUMBERED, "move {i} lands on unnumbered {to}");
        assert!(visited.insert(value), "move {i} revisits value {value}");
        assert_eq!(
            Some(value),
            lowest,
            "move {i} took {value} but {lowest:?} was open"
        );
        at = to;
    }

    let open = open_moves(board, at, &visited);
    assert!(
        open.is_empty(),
        "walk stopped at {at} with {open:?} still open"
    );
}

fn open_moves(
    board: &SpiralBoard,
    from: Coord,
    visited: &IndexSet<CellValue>,
) -> Vec<(Coord, CellValue)> {
    knight_moves(board, from)
        .into_iter()
        .filter_map(|to| board.get(to).map(|v| (to, v)))
        .filter(|&(_, v)| v != UNNUMBERED && !visited.contains(&v))
        .collect()
}
