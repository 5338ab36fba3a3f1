//! Board module - the playfield grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a color token.
//! Uses a flat array so a board is a plain `Copy`-sized value; every
//! placement operation returns a new board instead of touching the receiver.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are always open: pieces may hang there while
//! they enter, and nothing can be stored there.

use crate::pieces::Shape;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row-major 2D view of a board, as handed to renderers.
pub type BoardRows = [[Cell; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from row-major cells
    pub fn from_rows(rows: BoardRows) -> Self {
        let mut cells = [None; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y), for building fixtures.
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Whether `shape` fits with its top-left corner at (x, y).
    ///
    /// Every filled cell must be inside the side walls and above the floor.
    /// Cells above the board (y < 0) are never checked for occupancy.
    pub fn can_place(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().iter().all(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            py < 0 || !self.is_occupied(px, py)
        })
    }

    /// New board with the visible cells of `shape` at (x, y) painted `color`.
    ///
    /// Cells that fall above the board are dropped. Cells outside the side
    /// walls or below the floor are dropped too; callers only merge shapes
    /// that passed [`Board::can_place`].
    pub fn merge(&self, shape: &Shape, x: i8, y: i8, color: Color) -> Board {
        let mut next = *self;
        for (dx, dy) in shape.cells() {
            next.set(x + dx, y + dy, Some(color));
        }
        next
    }

    /// Remove every full row and return the compacted board with the count.
    ///
    /// Remaining rows keep their order and sink to the bottom; the same number
    /// of empty rows appear at the top. Uses a two-pointer scan from the bottom.
    pub fn clear_full_rows(&self) -> (Board, usize) {
        let mut next = Board::new();
        let mut write_y = HEIGHT;
        let mut cleared = 0;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                next.cells[write_y * WIDTH..(write_y + 1) * WIDTH]
                    .copy_from_slice(self.row(read_y));
            }
        }

        (next, cleared)
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to row-major 2D form
    pub fn rows(&self) -> BoardRows {
        let mut out = [[None; WIDTH]; HEIGHT];
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
