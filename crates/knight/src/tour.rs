//! Build-then-walk in one call.

use crate::config::{TourConfig, TourError};
use knight_board::SpiralBoard;
use knight_walk::{walk, Path, WalkSummary};
use log::debug;

/// A built board together with the walk made on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    /// The numbered board.
    pub board: SpiralBoard,
    /// The knight's path on it.
    pub path: Path,
}

impl Tour {
    /// Headline numbers of the walk.
    pub fn summary(&self) -> WalkSummary {
        WalkSummary::of(&self.board, &self.path)
    }
}

/// Validate `config`, build its board, and walk it from the configured
/// start.
pub fn run(config: &TourConfig) -> Result<Tour, TourError> {
    config.validate()?;
    let board = SpiralBoard::build(config.size)?;
    let path = walk(&board, config.resolved_start())?;
    debug!(
        "tour on size {} finished after {} moves",
        config.size,
        path.len()
    );
    Ok(Tour { board, path })
}
