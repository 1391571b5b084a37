//! The game engine: the only mutator of a game's state.
//!
//! A presentation layer maps input to a column index, calls
//! [`GameEngine::drop_piece`], and renders the returned state. Each call
//! runs to completion:
//!
//! 1. Reject the move if the game is over, the column is out of range, or
//!    the column is full.
//! 2. Place the active player's piece in the lowest open row.
//! 3. If the mover completed a line, the game is won and the turn stays.
//! 4. Otherwise, if the top row is full, the game is a tie.
//! 5. Otherwise, the turn passes to the other player.
//!
//! The engine has no internal locking. Callers sharing one engine across
//! input sources must serialize access themselves.

use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::core::{GameConfig, GameState, GameStatus, OpenRow, Placement};
use crate::error::{ConfigError, InvalidMoveReason, MoveError};

use super::win::{self, Line};

/// Contract for a turn-based game driven by column-like moves.
///
/// The engine calls into nothing; callers call into it. The default
/// methods are conveniences built on the required ones.
pub trait RulesEngine {
    /// The state a caller renders.
    type State;

    /// Get the current state.
    fn state(&self) -> &Self::State;

    /// Moves that `apply_move` would accept right now.
    ///
    /// Empty once the game is over.
    fn legal_moves(&self) -> SmallVec<[usize; 8]>;

    /// Apply one move for the active player.
    fn apply_move(&mut self, column: isize) -> Result<&Self::State, MoveError>;

    /// Current status.
    fn status(&self) -> GameStatus;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Apply moves in order, stopping at the first rejected one.
    ///
    /// Returns the number of moves applied, or the error with the state
    /// left as it was after the last accepted move.
    fn apply_moves<I>(&mut self, columns: I) -> Result<usize, MoveError>
    where
        I: IntoIterator<Item = isize>,
    {
        let mut applied = 0;
        for column in columns {
            self.apply_move(column)?;
            applied += 1;
        }
        Ok(applied)
    }
}

/// Owns one game and mediates every transition on it.
///
/// ## Example
///
/// ```
/// use connect_four::core::{GameStatus, PlayerId};
/// use connect_four::rules::GameEngine;
///
/// let mut engine = GameEngine::new();
///
/// // Player 1 stacks column 3, Player 2 stacks column 4
/// for _ in 0..3 {
///     engine.drop_piece(3).unwrap();
///     engine.drop_piece(4).unwrap();
/// }
/// let state = engine.drop_piece(3).unwrap();
///
/// assert_eq!(state.status(), GameStatus::Won(PlayerId::ONE));
/// assert!(engine.drop_piece(0).unwrap_err().is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Start a game on the standard 7×6 board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            state: GameState::default(),
        }
    }

    /// Start a game with the given board dimensions.
    pub fn initialize(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("new {}x{} game", config.width, config.height);

        Ok(Self {
            state: GameState::new(&config)?,
            config,
        })
    }

    /// Get the configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the engine, keeping the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Discard the current game and start a fresh one on the same board.
    pub fn reset(&mut self) {
        debug!("reset {}x{} game", self.config.width, self.config.height);
        let mut board = std::mem::take(&mut self.state.board);
        board.clear();
        self.state = GameState::with_board(board);
    }

    /// Find the row a piece dropped into `column` would land in.
    ///
    /// Out-of-range columns are an `InvalidMove`. A full column is
    /// `Ok(OpenRow::ColumnFull)`.
    pub fn find_lowest_open_row(&self, column: isize) -> Result<OpenRow, MoveError> {
        usize::try_from(column)
            .ok()
            .and_then(|c| self.state.board.lowest_open_row(c))
            .ok_or(MoveError::InvalidMove {
                column,
                reason: InvalidMoveReason::OutOfRange,
            })
    }

    /// Drop the active player's piece into `column`.
    ///
    /// On success returns the updated state. On error the state is
    /// unchanged:
    /// - `GameOver` if the game already ended (checked first)
    /// - `InvalidMove` if the column is out of range or full
    pub fn drop_piece(&mut self, column: isize) -> Result<&GameState, MoveError> {
        if self.state.is_terminal() {
            trace!("rejected column {column}: game is over");
            return Err(MoveError::GameOver {
                status: self.state.status,
            });
        }

        let player = self.state.active_player;
        let dropped = usize::try_from(column)
            .ok()
            .and_then(|c| Some((c, self.state.board.drop_piece(c, player)?)));
        let (checked, row) = match dropped {
            Some((c, OpenRow::Found(row))) => (c, row),
            None => {
                trace!("rejected column {column}: out of range");
                return Err(MoveError::InvalidMove {
                    column,
                    reason: InvalidMoveReason::OutOfRange,
                });
            }
            Some((_, OpenRow::ColumnFull)) => {
                trace!("rejected column {column}: full");
                return Err(MoveError::InvalidMove {
                    column,
                    reason: InvalidMoveReason::ColumnFull,
                });
            }
        };

        self.state.move_count += 1;
        self.state.last_placement = Some(Placement {
            player,
            row,
            column: checked,
        });
        debug!("{player} dropped into column {checked}, landed in row {row}");

        if win::wins_through(&self.state.board, row, checked, player) {
            self.state.status = GameStatus::Won(player);
            info!("{player} won after {} moves", self.state.move_count);
        } else if self.state.board.is_top_row_full() {
            self.state.status = GameStatus::Tie;
            info!("tie after {} moves", self.state.move_count);
        } else {
            self.state.active_player = player.other();
        }

        Ok(&self.state)
    }

    /// Columns that currently accept a piece, left to right.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_columns(&self) -> SmallVec<[usize; 8]> {
        if self.state.is_terminal() {
            return SmallVec::new();
        }

        let board = &self.state.board;
        (0..board.width())
            .filter(|&column| !board.is_column_full(column))
            .collect()
    }

    /// The completed line, if the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        let winner = self.state.status.winner()?;
        win::winning_line(&self.state.board, winner)
    }
}

impl RulesEngine for GameEngine {
    type State = GameState;

    fn state(&self) -> &GameState {
        &self.state
    }

    fn legal_moves(&self) -> SmallVec<[usize; 8]> {
        self.legal_columns()
    }

    fn apply_move(&mut self, column: isize) -> Result<&GameState, MoveError> {
        self.drop_piece(column)
    }

    fn status(&self) -> GameStatus {
        self.state.status
    }
}
