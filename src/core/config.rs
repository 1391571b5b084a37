//! Game configuration.
//!
//! Callers configure the board size at startup. The defaults match the
//! standard game: 7 columns by 6 rows.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of same-owner pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// Default number of columns.
pub const DEFAULT_WIDTH: usize = 7;

/// Default number of rows.
pub const DEFAULT_HEIGHT: usize = 6;

/// Largest number of cells a board may have.
pub const MAX_CELLS: usize = 1 << 16;

/// Board configuration.
///
/// ## Example
///
/// ```
/// use connect_four::core::GameConfig;
///
/// let config = GameConfig::new().with_width(9).with_height(7);
/// assert_eq!(config.width, 9);
/// assert_eq!(config.height, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Create the standard 7×6 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Total number of cells on the board.
    ///
    /// Fails for zero-sized boards and boards above `MAX_CELLS`.
    pub fn cell_count(&self) -> Result<usize, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }

        self.width
            .checked_mul(self.height)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Check that the board can hold at least one piece and fits in
    /// `MAX_CELLS`.
    ///
    /// Boards smaller than `CONNECT` along an axis are accepted, but no
    /// line along that axis can ever be completed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cell_count()?;

        if self.width < CONNECT && self.height < CONNECT {
            warn!(
                "{}x{} board is too small for any line of {}; the game can only end in a tie",
                self.width, self.height, CONNECT
            );
        } else if self.width < CONNECT {
            warn!(
                "board is {} wide: only vertical lines of {} are possible",
                self.width, CONNECT
            );
        } else if self.height < CONNECT {
            warn!(
                "board is {} high: only horizontal lines of {} are possible",
                self.height, CONNECT
            );
        }

        Ok(())
    }
}
