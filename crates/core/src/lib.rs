//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules: the piece catalog, the board,
//! and the state machine that moves, rotates, drops, locks and spawns pieces.
//! It has no notion of time, threads, input devices or rendering; drivers call
//! its operations and read back snapshots.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetrominoes, their rotation matrices and colors
//! - [`board`]: 10x20 grid with placement checks, merging and line clearing
//! - [`game_state`]: the aggregate state and its transitions
//! - [`rng`]: piece sources (seeded random or scripted)
//! - [`scoring`]: flat 100 points per cleared row
//! - [`snapshot`]: render view of a state
//!
//! # Rules
//!
//! - Pieces spawn at column 3, two rows above the board, in rotation 0
//! - Kinds are drawn uniformly at random (no bag)
//! - Rotation advances one state clockwise and never kicks
//! - A piece that cannot fall locks immediately; full rows clear
//! - The game ends when a new piece cannot enter the board
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, RandomSource};
//! use blockfall_core::types::GameAction;
//!
//! let mut source = RandomSource::seeded(12345);
//! let game = GameState::new(&mut source);
//!
//! let game = game.apply_action(GameAction::MoveRight, &mut source);
//! let game = game.apply_action(GameAction::RotateCw, &mut source);
//! let game = game.gravity_tick(&mut source);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardRows};
pub use game_state::{GameState, Tetromino, TickOutcome};
pub use pieces::{color, get_shape, random_kind, rotation_states, Shape};
pub use rng::{PieceSource, RandomSource, SequenceSource};
pub use scoring::line_clear_score;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
