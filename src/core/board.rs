//! The game board: a fixed grid of cells under gravity.
//!
//! Row 0 is the top of the board and row `height - 1` is the bottom.
//! Pieces dropped into a column settle in its lowest empty cell, so a
//! cell is only ever occupied when every cell below it is occupied too.
//!
//! ## Coordinates
//!
//! Cells are addressed as `(row, column)`. Storage is row-major.

use serde::{Deserialize, Serialize};

use super::config::{GameConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::player::PlayerId;
use crate::error::ConfigError;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// A piece owned by a player.
    Occupied(PlayerId),
}

impl Cell {
    /// Check if the cell holds no piece.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The owner of the piece in this cell, if any.
    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Result of searching a column for the cell a piece would land in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenRow {
    /// The lowest empty row in the column.
    Found(usize),
    /// Every cell in the column is occupied.
    ColumnFull,
}

impl OpenRow {
    /// The row, if the column has room.
    #[must_use]
    pub fn row(self) -> Option<usize> {
        match self {
            OpenRow::Found(row) => Some(row),
            OpenRow::ColumnFull => None,
        }
    }
}

/// A `width` × `height` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    /// An empty board of the standard 7×6 size.
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails for the sizes `GameConfig::cell_count` rejects.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let cell_count = GameConfig { width, height }.cell_count()?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; cell_count],
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    // === Cell Access ===

    /// Get the cell at `(row, column)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.height && column < self.width {
            Some(self.cells[self.index(row, column)])
        } else {
            None
        }
    }

    /// Check if a signed coordinate is on the board and owned by `player`.
    ///
    /// Off-board coordinates are never owned.
    #[must_use]
    pub fn is_owned_by(&self, row: isize, column: isize, player: PlayerId) -> bool {
        if row < 0 || column < 0 {
            return false;
        }
        self.get(row as usize, column as usize) == Some(Cell::Occupied(player))
    }

    /// Get one row of cells, left to right, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = self.index(row, 0);
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    // === Gravity ===

    /// Find the lowest empty row in a column, searching from the bottom up.
    ///
    /// Returns `None` if `column` is not less than the board width.
    #[must_use]
    pub fn lowest_open_row(&self, column: usize) -> Option<OpenRow> {
        if column >= self.width {
            return None;
        }

        let open = (0..self.height)
            .rev()
            .find(|&row| self.cells[self.index(row, column)].is_empty())
            .map_or(OpenRow::ColumnFull, OpenRow::Found);
        Some(open)
    }

    /// Check if a column has no empty cells.
    ///
    /// Columns off the board are not full; they do not exist.
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_open_row(column) == Some(OpenRow::ColumnFull)
    }

    /// Drop a piece into a column.
    ///
    /// Returns the row the piece landed in, or `ColumnFull` without
    /// changing the board. Returns `None`, also without changing the
    /// board, if `column` is not less than the board width.
    pub fn drop_piece(&mut self, column: usize, player: PlayerId) -> Option<OpenRow> {
        let open = self.lowest_open_row(column)?;
        if let OpenRow::Found(row) = open {
            let idx = self.index(row, column);
            self.cells[idx] = Cell::Occupied(player);
        }
        Some(open)
    }

    /// Empty every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if every cell of the top row is occupied.
    ///
    /// Given gravity consistency this means the board is full.
    #[must_use]
    pub fn is_top_row_full(&self) -> bool {
        self.row(0)
            .is_some_and(|top| top.iter().all(|c| !c.is_empty()))
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Check that no occupied cell sits directly above an empty cell.
    #[must_use]
    pub fn is_gravity_consistent(&self) -> bool {
        (0..self.height.saturating_sub(1)).all(|row| {
            (0..self.width).all(|column| {
                let above = self.cells[self.index(row, column)];
                let below = self.cells[self.index(row + 1, column)];
                above.is_empty() || !below.is_empty()
            })
        })
    }

    // === Symmetry ===

    /// The board reflected left to right.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.rows() {
            cells.extend(row.iter().rev().copied());
        }
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// The board with every piece handed to the other player.
    #[must_use]
    pub fn with_players_swapped(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|cell| cell.owner().map_or(Cell::Empty, |p| Cell::Occupied(p.other())))
            .collect();
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders one line per row: `.` for empty, the player number otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell.owner() {
                    None => write!(f, ".")?,
                    Some(player) => write!(f, "{}", player.number())?,
                }
            }
        }
        Ok(())
    }
}

/// Unchecked wire form of a board.
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = GameConfig {
            width: raw.width,
            height: raw.height,
        }
        .cell_count()
        .map_err(|e| e.to_string())?;

        if raw.cells.len() != expected {
            return Err(format!(
                "expected {} cells for a {}x{} board, got {}",
                expected,
                raw.width,
                raw.height,
                raw.cells.len()
            ));
        }

        let board = Board {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        };
        if !board.is_gravity_consistent() {
            return Err("board has a piece floating above an empty cell".to_string());
        }
        Ok(board)
    }
}
