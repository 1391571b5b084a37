//! Error types.
//!
//! Every error is a recoverable return value. A failed operation never
//! mutates game state.

use thiserror::Error;

use crate::core::GameStatus;

/// Why a column was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Column index is negative or not less than the board width.
    OutOfRange,
    /// Every cell in the column is occupied.
    ColumnFull,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange => write!(f, "column out of range"),
            InvalidMoveReason::ColumnFull => write!(f, "column is full"),
        }
    }
}

/// A move request that could not be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The column is out of range or already full.
    #[error("invalid move in column {column}: {reason}")]
    InvalidMove {
        column: isize,
        reason: InvalidMoveReason,
    },

    /// The game already reached a terminal status.
    #[error("game is over: {status}")]
    GameOver { status: GameStatus },
}

impl MoveError {
    /// Check whether this is an `InvalidMove` error.
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::InvalidMove { .. })
    }

    /// Check whether this is a `GameOver` error.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveError::GameOver { .. })
    }
}

/// A board configuration that cannot be played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width must be at least 1")]
    ZeroWidth,

    #[error("board height must be at least 1")]
    ZeroHeight,

    #[error("{width}x{height} board exceeds {} cells", crate::core::MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}
