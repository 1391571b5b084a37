//! # connect-four
//!
//! A rules engine for Connect Four, independent of any presentation layer.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: Each `GameEngine` owns one `GameState`. Independent
//!    games never share anything.
//!
//! 2. **Single Transition**: The only way to change a game is
//!    `GameEngine::drop_piece`, which validates, places, and evaluates
//!    the result in one synchronous call.
//!
//! 3. **Errors Are Values**: Rejected moves return `MoveError` and leave
//!    the state untouched.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, board, and game state
//! - `rules`: Win detection and the game engine
//! - `error`: Move and configuration errors

pub mod core;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId,
    GameConfig, CONNECT, DEFAULT_WIDTH, DEFAULT_HEIGHT, MAX_CELLS,
    Board, Cell, OpenRow,
    GameState, GameStatus, Placement,
};

pub use crate::rules::{GameEngine, RulesEngine, Direction, Line, check_for_win, winning_line, wins_through};

pub use crate::error::{ConfigError, InvalidMoveReason, MoveError};
