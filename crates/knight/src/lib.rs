//! The trapped knight.
//!
//! A chess knight starts on square 1 of a board numbered along an outward
//! square spiral and always jumps to the lowest-numbered square it has not
//! visited. On the classic board it is trapped on square 2084 after 2015
//! moves.
//!
//! This is the facade crate: it re-exports the board and walk crates and
//! adds a validated [`TourConfig`], a one-call [`run`], and a parallel
//! [`survey`] of many start squares.
//!
//! # Quick start
//!
//! ```rust
//! use knight::prelude::*;
//!
//! let tour = knight::run(&TourConfig::default()).unwrap();
//! let summary = tour.summary();
//! assert_eq!(summary.trapped_value, 2084);
//! assert_eq!(summary.moves, 2015);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `knight-core` | `Coord`, offsets, directions, errors |
//! | [`board`] | `knight-board` | `SpiralBoard` and knight move generation |
//! | [`walk`] | `knight-walk` | `KnightWalker`, `Path`, `WalkSummary` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod survey;
pub mod tour;

/// Core types and errors (`knight-core`).
pub use knight_core as types;

/// Spiral boards and the knight move bounds filter (`knight-board`).
pub use knight_board as board;

/// The greedy walk and its results (`knight-walk`).
pub use knight_walk as walk;

pub use config::{TourConfig, TourError};
pub use survey::survey;
pub use tour::{run, Tour};

/// Common imports for typical use.
///
/// ```rust
/// use knight::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use knight_core::{CellValue, Coord, UNNUMBERED};

    // Errors
    pub use knight_core::{BoundsError, ConfigError, WalkError};

    // Board
    pub use knight_board::SpiralBoard;

    // Walk
    pub use knight_walk::{walk, KnightWalker, Path, WalkSummary};

    // Facade
    pub use crate::{TourConfig, TourError};
}
