//! Game rules: win detection and the engine that enforces turn order.
//!
//! `GameEngine` owns a `GameState` and is the only way to change it:
//! - Move legality (game over, column range, full column)
//! - Placement under gravity
//! - Win and tie evaluation after each move
//! - Turn sequencing

pub mod win;
pub mod engine;

pub use engine::{GameEngine, RulesEngine};
pub use win::{check_for_win, winning_line, wins_through, Direction, Line};
