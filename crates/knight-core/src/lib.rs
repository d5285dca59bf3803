//! Core types for the trapped knight workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the board builder and the walker:
//! grid coordinates, knight and spiral step tables, cell values, and the
//! error types both stages report.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;

pub use coord::{CellValue, Coord, Direction, KNIGHT_OFFSETS, SPIRAL_ORDER, UNNUMBERED};
pub use error::{BoundsError, ConfigError, WalkError};
