//! The trapped knight walk.
//!
//! A knight starts on a numbered board and always jumps to the legal
//! destination holding the lowest number it has not visited yet. The walk
//! ends when no such destination exists.
//!
//! # Pieces
//!
//! 1. [`VisitedSet`]: values (not cells) already consumed by the walk
//! 2. [`candidates`] / [`select`]: bounds filter, visited filter, minimum scan
//! 3. [`KnightWalker`]: one greedy move per [`Iterator::next`]
//! 4. [`Path`] / [`WalkSummary`]: the walk's result and a digest of it

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod path;
pub mod select;
pub mod summary;
pub mod visited;
pub mod walker;

pub use path::Path;
pub use select::{candidates, select, Candidates};
pub use summary::WalkSummary;
pub use visited::VisitedSet;
pub use walker::{walk, KnightWalker};
