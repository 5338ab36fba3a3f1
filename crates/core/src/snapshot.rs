//! Snapshot module - the read-only view handed to renderers
//!
//! A [`GameSnapshot`] is a plain value: renderers can keep it, diff it, or
//! serialize it (with the `serde` feature) without touching engine state.

use crate::board::BoardRows;
use crate::game_state::Tetromino;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSnapshot {
    /// Locked cells plus the visible cells of the active piece
    pub board: BoardRows,
    pub active: ActiveSnapshot,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell at (x, y); `None` when empty or out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Text rendering for logs: `.` for empty, the color's initial otherwise.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((BOARD_WIDTH as usize + 1) * BOARD_HEIGHT as usize);
        for row in &self.board {
            for cell in row {
                let ch = match cell {
                    Some(color) => color.as_str().chars().next().unwrap_or('#'),
                    None => '.',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::from(Tetromino::new(PieceKind::I)),
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
