//! Square-spiral numbered boards.
//!
//! This crate builds the board the knight walks on: a finite square grid
//! where each cell holds the step at which an outward square spiral,
//! started at the center, entered it.
//!
//! # Contents
//!
//! - [`SpiralBoard`]: bounds-checked, immutable 2D container of cell values
//! - [`spiral_legs`]: the leg schedule (`Right 1, Up 1, Left 2, Down 2, ...`)
//! - [`knight_moves`]: in-bounds knight destinations from a cell

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod moves;
pub mod spiral;

#[cfg(test)]
pub(crate) mod compliance;

pub use board::SpiralBoard;
pub use moves::knight_moves;
pub use spiral::{spiral_legs, SpiralLegs};
