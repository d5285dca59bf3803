//! The ordered cells a walk visited.

use knight_board::SpiralBoard;
use knight_core::{CellValue, Coord, UNNUMBERED};
use std::iter;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_i32(mut hash: u64, v: i32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// The result of a walk: the start square and every move made from it.
///
/// [`moves`](Self::moves) excludes the start and ends on the square where
/// the knight was trapped. An empty path means the knight could not move
/// at all.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    start: Coord,
    moves: Vec<Coord>,
}

impl Path {
    /// Assemble a path from its start and its moves.
    pub fn new(start: Coord, moves: Vec<Coord>) -> Self {
        Self { start, moves }
    }

    /// Where the knight started.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Cells landed on, in order, start excluded.
    pub fn moves(&self) -> &[Coord] {
        &self.moves
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the knight was trapped on its start square.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The square the knight ended on.
    pub fn trapped_at(&self) -> Coord {
        self.moves.last().copied().unwrap_or(self.start)
    }

    /// Each jump as `(from, to)`, starting from the start square.
    ///
    /// Yields [`len`](Self::len) pairs; this is what a renderer draws.
    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        iter::once(self.start)
            .chain(self.moves.iter().copied())
            .zip(self.moves.iter().copied())
    }

    /// Values under each move on `board`. Cells off `board` read as
    /// [`UNNUMBERED`].
    pub fn values(&self, board: &SpiralBoard) -> Vec<CellValue> {
        self.moves
            .iter()
            .map(|&at| board.get(at).unwrap_or(UNNUMBERED))
            .collect()
    }

    /// FNV-1a hash over the start and every move.
    ///
    /// Not cryptographic; used to compare walks cheaply across runs.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = FNV_OFFSET;
        for at in iter::once(&self.start).chain(&self.moves) {
            hash = fnv1a_i32(hash, at.row);
            hash = fnv1a_i32(hash, at.col);
        }
        hash
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
