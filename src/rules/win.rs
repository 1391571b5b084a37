//! Win detection.
//!
//! A player wins by owning `CONNECT` cells in a straight line along one
//! of four directions. Two checks are provided:
//!
//! - [`check_for_win`]: scans every cell and direction on the board. This
//!   is the definition of a win.
//! - [`wins_through`]: only looks at the lines through one cell. After a
//!   move, a new line must pass through the cell just filled, so this gives
//!   the same answer for the player who moved, at a fraction of the cost.

use crate::core::{Board, PlayerId, CONNECT};

/// A step between adjacent cells of a line, as `(row delta, column delta)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub d_row: isize,
    pub d_column: isize,
}

impl Direction {
    /// Left to right along a row.
    pub const HORIZONTAL: Direction = Direction { d_row: 0, d_column: 1 };
    /// Top to bottom along a column.
    pub const VERTICAL: Direction = Direction { d_row: 1, d_column: 0 };
    /// Down and to the right.
    pub const DIAGONAL_DOWN_RIGHT: Direction = Direction { d_row: 1, d_column: 1 };
    /// Down and to the left.
    pub const DIAGONAL_DOWN_LEFT: Direction = Direction { d_row: 1, d_column: -1 };

    /// All four line directions. Each line is reached from exactly one
    /// end, so opposite directions are not needed.
    pub const ALL: [Direction; 4] = [
        Direction::HORIZONTAL,
        Direction::VERTICAL,
        Direction::DIAGONAL_DOWN_RIGHT,
        Direction::DIAGONAL_DOWN_LEFT,
    ];
}

/// Coordinates `(row, column)` of a completed line, in step order.
pub type Line = [(usize, usize); CONNECT];

/// Build the line starting at `(row, column)` stepping by `direction`, if
/// every cell is on the board and owned by `player`.
fn line_from(
    board: &Board,
    row: usize,
    column: usize,
    direction: Direction,
    player: PlayerId,
) -> Option<Line> {
    let mut line = [(0, 0); CONNECT];
    for (step, slot) in line.iter_mut().enumerate() {
        let r = row as isize + direction.d_row * step as isize;
        let c = column as isize + direction.d_column * step as isize;
        if !board.is_owned_by(r, c, player) {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(line)
}

/// Find the first line owned by `player`, scanning rows top to bottom and
/// columns left to right.
#[must_use]
pub fn winning_line(board: &Board, player: PlayerId) -> Option<Line> {
    for row in 0..board.height() {
        for column in 0..board.width() {
            for direction in Direction::ALL {
                if let Some(line) = line_from(board, row, column, direction, player) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Check the whole board for a line owned by `player`.
#[must_use]
pub fn check_for_win(board: &Board, player: PlayerId) -> bool {
    winning_line(board, player).is_some()
}

/// Count consecutive `player` cells from `(row, column)` stepping by
/// `(d_row, d_column)`, excluding the start cell.
fn run_length(
    board: &Board,
    row: usize,
    column: usize,
    d_row: isize,
    d_column: isize,
    player: PlayerId,
) -> usize {
    let mut count = 0;
    let mut r = row as isize + d_row;
    let mut c = column as isize + d_column;
    while count < CONNECT && board.is_owned_by(r, c, player) {
        count += 1;
        r += d_row;
        c += d_column;
    }
    count
}

/// Check the lines through `(row, column)` for one owned by `player`.
///
/// Returns false if the cell itself is not owned by `player`.
#[must_use]
pub fn wins_through(board: &Board, row: usize, column: usize, player: PlayerId) -> bool {
    if !board.is_owned_by(row as isize, column as isize, player) {
        return false;
    }

    Direction::ALL.iter().any(|d| {
        let forward = run_length(board, row, column, d.d_row, d.d_column, player);
        let backward = run_length(board, row, column, -d.d_row, -d.d_column, player);
        1 + forward + backward >= CONNECT
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_drops(width: usize, height: usize, drops: &[(usize, PlayerId)]) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for &(column, player) in drops {
            board.drop_piece(column, player);
        }
        board
    }

    const P1: PlayerId = PlayerId::ONE;
    const P2: PlayerId = PlayerId::TWO;

    #[test]
    fn test_empty_board_no_win() {
        let board = Board::default();
        assert!(!check_for_win(&board, P1));
        assert!(!check_for_win(&board, P2));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from_drops(7, 6, &[(2, P1), (3, P1), (4, P1), (5, P1)]);

        assert!(check_for_win(&board, P1));
        assert!(!check_for_win(&board, P2));
        assert_eq!(winning_line(&board, P1), Some([(5, 2), (5, 3), (5, 4), (5, 5)]));
        assert!(wins_through(&board, 5, 4, P1));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from_drops(7, 6, &[(0, P2), (0, P2), (0, P2), (0, P2)]);

        assert!(check_for_win(&board, P2));
        assert_eq!(winning_line(&board, P2), Some([(2, 0), (3, 0), (4, 0), (5, 0)]));
        assert!(wins_through(&board, 2, 0, P2));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        // P1 at (5,0), (4,1), (3,2), (2,3)
        let board = board_from_drops(
            7,
            6,
            &[
                (0, P1),
                (1, P2),
                (1, P1),
                (2, P2),
                (2, P2),
                (2, P1),
                (3, P2),
                (3, P2),
                (3, P2),
                (3, P1),
            ],
        );

        assert!(check_for_win(&board, P1));
        assert_eq!(winning_line(&board, P1), Some([(2, 3), (3, 2), (4, 1), (5, 0)]));
        assert!(wins_through(&board, 2, 3, P1));
        assert!(wins_through(&board, 5, 0, P1));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        // P2 at (2,3), (3,4), (4,5), (5,6)
        let board = board_from_drops(
            7,
            6,
            &[
                (6, P2),
                (5, P1),
                (5, P2),
                (4, P1),
                (4, P1),
                (4, P2),
                (3, P1),
                (3, P1),
                (3, P1),
                (3, P2),
            ],
        );

        assert!(check_for_win(&board, P2));
        assert_eq!(winning_line(&board, P2), Some([(2, 3), (3, 4), (4, 5), (5, 6)]));
        assert!(wins_through(&board, 4, 5, P2));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let board = board_from_drops(7, 6, &[(0, P1), (1, P1), (2, P1)]);
        assert!(!check_for_win(&board, P1));
        assert!(!wins_through(&board, 5, 2, P1));
    }

    #[test]
    fn test_line_does_not_wrap_rows() {
        // Three at the end of the bottom row, one at the start of the row above
        let board = board_from_drops(
            7,
            6,
            &[(4, P1), (5, P1), (6, P1), (0, P2), (0, P1)],
        );
        assert!(!check_for_win(&board, P1));
    }

    #[test]
    fn test_interrupted_line() {
        let board = board_from_drops(7, 6, &[(0, P1), (1, P1), (2, P2), (3, P1), (4, P1)]);
        assert!(!check_for_win(&board, P1));
        assert!(!wins_through(&board, 5, 3, P1));
    }

    #[test]
    fn test_wins_through_unowned_cell() {
        let board = board_from_drops(7, 6, &[(0, P1), (1, P1), (2, P1), (3, P1)]);
        assert!(!wins_through(&board, 5, 0, P2));
        assert!(!wins_through(&board, 4, 0, P1));
    }

    #[test]
    fn test_undersized_board_never_wins() {
        let board = board_from_drops(3, 3, &[(0, P1), (1, P1), (2, P1), (0, P1), (1, P1)]);
        assert!(!check_for_win(&board, P1));
        assert!(!wins_through(&board, 2, 1, P1));
    }

    #[test]
    fn test_narrow_board_vertical_only() {
        let board = board_from_drops(1, 4, &[(0, P2), (0, P2), (0, P2), (0, P2)]);
        assert!(check_for_win(&board, P2));
        assert!(wins_through(&board, 0, 0, P2));
    }

    #[test]
    fn test_longer_line_wins() {
        let board = board_from_drops(7, 6, &[(0, P1), (1, P1), (3, P1), (4, P1), (2, P1)]);
        assert!(check_for_win(&board, P1));
        assert!(wins_through(&board, 5, 2, P1));
    }
}
