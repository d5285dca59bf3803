//! The greedy walk, one move per iteration.

use crate::path::Path;
use crate::select::{candidates, select};
use crate::visited::VisitedSet;
use knight_board::SpiralBoard;
use knight_core::{CellValue, Coord, WalkError};
use log::{debug, trace};
use std::iter::FusedIterator;

/// A knight walking a borrowed board.
///
/// Each call to [`next`](Iterator::next) makes one move and yields the
/// cell landed on. The iterator ends, and stays ended, once the knight is
/// trapped. Termination is guaranteed: every move consumes a value that
/// was never visited before, and the board holds finitely many.
#[derive(Clone, Debug)]
pub struct KnightWalker<'a> {
    board: &'a SpiralBoard,
    start: Coord,
    position: Coord,
    visited: VisitedSet,
    moves: Vec<Coord>,
    trapped: bool,
}

impl<'a> KnightWalker<'a> {
    /// Place the knight on `start`.
    ///
    /// Returns [`WalkError::StartOutOfBounds`] if `start` is off the board.
    /// Any on-board cell is accepted; the standard walk starts on `1`.
    pub fn new(board: &'a SpiralBoard, start: Coord) -> Result<Self, WalkError> {
        let origin = board.value(start)?;
        Ok(Self {
            board,
            start,
            position: start,
            visited: VisitedSet::with_origin(origin),
            moves: Vec::new(),
            trapped: false,
        })
    }

    /// Where the knight started.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Where the knight stands now.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Values visited so far, the start's included.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Moves made so far.
    pub fn moves(&self) -> &[Coord] {
        &self.moves
    }

    /// Whether the last attempt to move found nothing open.
    pub fn is_trapped(&self) -> bool {
        self.trapped
    }

    /// Walk until trapped and return the full path, including any moves
    /// already taken through the iterator.
    pub fn into_path(mut self) -> Path {
        while self.next().is_some() {}
        Path::new(self.start, self.moves)
    }

    fn value_here(&self) -> CellValue {
        self.board.get(self.position).unwrap_or_default()
    }
}

impl Iterator for KnightWalker<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.trapped {
            return None;
        }
        let open = candidates(self.board, self.position, &self.visited);
        let Some((to, value)) = select(&open) else {
            self.trapped = true;
            debug!(
                "knight trapped at {} after {} moves, final value is {}",
                self.position,
                self.moves.len(),
                self.value_here()
            );
            return None;
        };
        self.visited.insert(value);
        self.position = to;
        self.moves.push(to);
        trace!("move {}: {} -> square {}", self.moves.len(), to, value);
        Some(to)
    }
}

impl FusedIterator for KnightWalker<'_> {}

/// Walk from `start` until trapped.
///
/// The returned [`Path`] excludes `start` and is empty when the knight is
/// trapped immediately, which is a normal outcome rather than an error.
pub fn walk(board: &SpiralBoard, start: Coord) -> Result<Path, WalkError> {
    Ok(KnightWalker::new(board, start)?.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_core::{BoundsError, UNNUMBERED};
    use knight_test_utils::{assert_valid_walk, FIVE_BY_FIVE_VALUES, FIVE_BY_FIVE_WALK};
    use proptest::prelude::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    // ── Fixed scenarios ─────────────────────────────────────────

    #[test]
    fn five_by_five_walk_is_exact() {
        let b = SpiralBoard::build(4).unwrap();
        let path = walk(&b, c(2, 2)).unwrap();
        assert_eq!(path.moves(), FIVE_BY_FIVE_WALK.as_slice());
        assert_eq!(path.values(&b), FIVE_BY_FIVE_VALUES.to_vec());
        assert_eq!(path.trapped_at(), c(3, 2));
    }

    #[test]
    fn three_by_three_is_trapped_immediately() {
        let b = SpiralBoard::build(2).unwrap();
        let path = walk(&b, b.center()).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.trapped_at(), b.center());
    }

    #[test]
    fn start_off_board_is_rejected() {
        let b = SpiralBoard::build(4).unwrap();
        let err = walk(&b, c(5, 2)).unwrap_err();
        assert_eq!(
            err,
            WalkError::StartOutOfBounds(BoundsError {
                coord: c(5, 2),
                size: 4
            })
        );
        assert!(KnightWalker::new(&b, c(0, -1)).is_err());
    }

    #[test]
    fn unnumbered_cells_are_never_landed_on() {
        // From the center, 2 is the only numbered knight move; the zeros
        // around it would win a plain numeric minimum.
        let b = SpiralBoard::from_rows(vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 3],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 2, 0],
        ])
        .unwrap();
        let path = walk(&b, c(2, 2)).unwrap();
        assert_eq!(path.moves(), &[c(4, 3)]);
        assert_eq!(path.values(&b), vec![2]);
    }

    #[test]
    fn start_value_counts_as_visited() {
        let b = SpiralBoard::from_rows(vec![
            vec![9, 0, 0],
            vec![0, 0, 5],
            vec![0, 0, 0],
        ])
        .unwrap();
        // (1, 2) leads back to the 9 at (0, 0), which is the origin.
        let path = walk(&b, c(0, 0)).unwrap();
        assert_eq!(path.moves(), &[c(1, 2)]);
    }

    // ── Iterator behaviour ──────────────────────────────────────

    #[test]
    fn iterator_yields_moves_then_fuses() {
        let b = SpiralBoard::build(4).unwrap();
        let mut walker = KnightWalker::new(&b, c(2, 2)).unwrap();
        assert_eq!(walker.next(), Some(c(3, 4)));
        assert_eq!(walker.position(), c(3, 4));
        assert!(walker.visited().contains(10));
        let rest: Vec<Coord> = walker.by_ref().collect();
        assert_eq!(rest.len(), 8);
        assert!(walker.is_trapped());
        assert_eq!(walker.next(), None);
        assert_eq!(walker.moves().len(), 9);
    }

    #[test]
    fn into_path_keeps_moves_already_taken() {
        let b = SpiralBoard::build(4).unwrap();
        let mut walker = KnightWalker::new(&b, c(2, 2)).unwrap();
        walker.next();
        walker.next();
        let path = walker.into_path();
        assert_eq!(path.moves(), FIVE_BY_FIVE_WALK.as_slice());
        assert_eq!(path.start(), c(2, 2));
    }

    #[test]
    fn visited_order_matches_path_values() {
        let b = SpiralBoard::build(10).unwrap();
        let mut walker = KnightWalker::new(&b, b.center()).unwrap();
        while walker.next().is_some() {}
        let mut expected = vec![1];
        for &at in walker.moves() {
            expected.push(b.get(at).unwrap());
        }
        assert_eq!(walker.visited().iter().collect::<Vec<_>>(), expected);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn walks_are_valid_from_any_start(
            half in 1u32..10,
            r in 0i32..21,
            col in 0i32..21,
        ) {
            let b = SpiralBoard::build(half * 2).unwrap();
            let side = b.side() as i32;
            let start = c(r % side, col % side);
            let path = walk(&b, start).unwrap();
            assert_valid_walk(&b, start, path.moves());
            let start_numbered = b.get(start) != Some(UNNUMBERED);
            prop_assert!(path.len() + usize::from(start_numbered) <= b.numbered_count());
        }

        #[test]
        fn walking_twice_gives_the_same_path(half in 1u32..15) {
            let b = SpiralBoard::build(half * 2).unwrap();
            let first = walk(&b, b.center()).unwrap();
            let second = walk(&b, b.center()).unwrap();
            prop_assert_eq!(first.fingerprint(), second.fingerprint());
            prop_assert_eq!(first, second);
        }
    }
}
