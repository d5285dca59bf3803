//! Tour configuration, validation, and the combined error type.
//!
//! [`TourConfig`] is the input to [`run`](crate::run).
//! [`validate()`](TourConfig::validate) rejects a bad size before any
//! board is allocated.

use std::error::Error;
use std::fmt;

use knight_board::SpiralBoard;
use knight_core::{ConfigError, Coord, WalkError};

// ── TourError ──────────────────────────────────────────────────────

/// Errors from [`run`](crate::run): either stage can refuse its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourError {
    /// The board could not be built.
    Config(ConfigError),
    /// The walk could not start.
    Walk(WalkError),
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Walk(e) => write!(f, "walk: {e}"),
        }
    }
}

impl Error for TourError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Walk(e) => Some(e),
        }
    }
}

impl From<ConfigError> for TourError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<WalkError> for TourError {
    fn from(e: WalkError) -> Self {
        Self::Walk(e)
    }
}

// ── TourConfig ─────────────────────────────────────────────────────

/// What to build and where to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourConfig {
    /// Largest board index; the board is `(size + 1)` cells per side.
    /// Must be positive and even. Default: 100.
    pub size: u32,
    /// Start square. `None` = the board center, which holds `1`.
    pub start: Option<Coord>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            size: 100,
            start: None,
        }
    }
}

impl TourConfig {
    /// A config for a board of `size` starting at the center.
    pub fn with_size(size: u32) -> Self {
        Self { size, start: None }
    }

    /// Check the board size. The start square is checked against the
    /// built board by the walk itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        SpiralBoard::validate_size(self.size)
    }

    /// The start square, resolving `None` to the center.
    pub fn resolved_start(&self) -> Coord {
        self.start.unwrap_or_else(|| {
            let half = (self.size / 2) as i32;
            Coord::new(half, half)
        })
    }
}
