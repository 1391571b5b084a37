//! Core types: players, configuration, board, and game state.
//!
//! These are plain data. All transitions go through
//! [`GameEngine`](crate::rules::GameEngine).

pub mod player;
pub mod config;
pub mod board;
pub mod state;

pub use player::PlayerId;
pub use config::{GameConfig, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS};
pub use board::{Board, Cell, OpenRow};
pub use state::{GameState, GameStatus, Placement};
