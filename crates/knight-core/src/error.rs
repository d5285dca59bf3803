//! Error types for board construction and the knight walk.
//!
//! Two failure kinds exist: a board that cannot be built from its
//! configuration ([`ConfigError`]) and a walk whose start square lies off
//! the board ([`WalkError`]). Both are pure input errors; nothing here is
//! transient or retryable.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors detected while building or validating a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Size 0 has no cells beyond the center and no room for a spiral.
    ZeroSize,
    /// The center `size / 2` is only exact for even sizes.
    OddSize {
        /// The rejected size.
        size: u32,
    },
    /// Size exceeds the supported maximum.
    SizeTooLarge {
        /// The rejected size.
        size: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// A hand-supplied board is not square.
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Required length (the number of rows).
        expected: usize,
    },
    /// A hand-supplied board has no rows.
    EmptyBoard,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "board size must be positive"),
            Self::OddSize { size } => {
                write!(f, "board size {size} is odd; the center size/2 must be exact")
            }
            Self::SizeTooLarge { size, max } => {
                write!(f, "board size {size} exceeds maximum of {max}")
            }
            Self::NotSquare { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
            Self::EmptyBoard => write!(f, "board has no rows"),
        }
    }
}

impl Error for ConfigError {}

/// A coordinate outside `[0, size] x [0, size]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsError {
    /// The offending coordinate.
    pub coord: Coord,
    /// Largest valid index on either axis.
    pub size: u32,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinate {} out of bounds: [0, {}] x [0, {}]",
            self.coord, self.size, self.size
        )
    }
}

impl Error for BoundsError {}

/// Errors that prevent a walk from starting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// The start square is not on the board.
    StartOutOfBounds(BoundsError),
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(e) => write!(f, "start square rejected: {e}"),
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StartOutOfBounds(e) => Some(e),
        }
    }
}

impl From<BoundsError> for WalkError {
    fn from(e: BoundsError) -> Self {
        Self::StartOutOfBounds(e)
    }
}
