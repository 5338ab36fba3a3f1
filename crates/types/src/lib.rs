//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing/naming, so they can
//! be shared by the engine, the drive loop and any external renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, -2), two rows above the visible board
//!
//! # Timing
//!
//! The engine has no clock. The drive loop delivers a gravity tick every
//! [`GRAVITY_INTERVAL_MS`] milliseconds; the value lives here only so that
//! drivers agree on a default.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = GameAction::from_str("rotateCw").unwrap();
//! assert_eq!(action, GameAction::RotateCw);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the rotation matrix's top-left corner when a piece spawns.
pub const SPAWN_X: i8 = 3;

/// Row of the rotation matrix's top-left corner when a piece spawns.
///
/// Negative: new pieces start above the visible board.
pub const SPAWN_Y: i8 = -2;

/// Default gravity period used by drivers (one row every 500ms).
pub const GRAVITY_INTERVAL_MS: u64 = 500;

/// Points awarded per cleared row. Flat: clearing 4 rows is worth 4x one row.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Color token stored in occupied board cells.
///
/// The engine treats colors as opaque; renderers decide what they look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Magenta,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Magenta => "magenta",
            Color::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a piece of that color
pub type Cell = Option<Color>;

/// Discrete input signals a driver can deliver to the engine.
///
/// Each maps 1:1 to an engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot fall
    SoftDrop,
    /// Advance to the next rotation state
    RotateCw,
}

impl GameAction {
    /// All actions, in declaration order.
    pub const ALL: [GameAction; 4] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::RotateCw,
    ];

    /// Parse action from string (case-insensitive camelCase names)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
        }
    }
}
