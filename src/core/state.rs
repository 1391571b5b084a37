//! Game state: board, turn, and terminal status.
//!
//! ## GameState
//!
//! Everything a presentation layer needs to render a game:
//! - The board
//! - The active player
//! - The status (in progress, won, tie)
//! - Where the last piece landed
//!
//! `GameState` is only mutated by the engine. Callers read it.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::GameConfig;
use super::player::PlayerId;
use crate::error::ConfigError;

/// Whether the game continues, and how it ended if not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A player completed a line.
    Won(PlayerId),
    /// The board filled with no line completed.
    Tie,
}

impl GameStatus {
    /// Check if no further moves are accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The winner, if the game was won.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{player} won!"),
            GameStatus::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Where a piece landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Owner of the piece.
    pub player: PlayerId,
    /// Row the piece settled in.
    pub row: usize,
    /// Column the piece was dropped into.
    pub column: usize,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) active_player: PlayerId,
    pub(crate) status: GameStatus,
    pub(crate) last_placement: Option<Placement>,
    pub(crate) move_count: u32,
}

impl Default for GameState {
    /// The starting state on the standard 7×6 board.
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}

impl GameState {
    /// Create the starting state: empty board, Player 1 to move.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_board(Board::new(config.width, config.height)?))
    }

    /// Starting state on the given board.
    pub(crate) fn with_board(board: Board) -> Self {
        Self {
            board,
            active_player: PlayerId::ONE,
            status: GameStatus::InProgress,
            last_placement: None,
            move_count: 0,
        }
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    ///
    /// After a winning move this stays the winner.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The most recent placement, or `None` before the first move.
    #[must_use]
    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Number of pieces placed so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}
