//! Game state module - the engine's state machine
//!
//! [`GameState`] is the single source of truth: board, active piece, score,
//! cleared-line count and the game-over flag. It is a small `Copy` value and
//! every operation is a pure function from the current state (plus input) to
//! the next one; the receiver is never modified.
//!
//! A piece goes through `Spawning -> Falling -> Locking -> (LineClearing) ->
//! Spawning`. Only `Falling` is observable between operations; the other
//! phases happen inside a single [`GameState::gravity_tick`]. `GameOver` is
//! entered only from the spawn step, either because the new piece cannot
//! enter or because the previous piece locked with cells above the board. It
//! absorbs every later operation.
//!
//! Illegal moves are not errors: the operation returns the state unchanged.

use crate::board::Board;
use crate::pieces::{color, get_shape, rotation_count, Shape};
use crate::rng::PieceSource;
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Index into the kind's rotation states, always below the state count.
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, 0, SPAWN_X, SPAWN_Y)
    }

    /// Create a tetromino at an arbitrary anchor
    pub fn at(kind: PieceKind, rotation: usize, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: rotation % rotation_count(kind),
            x,
            y,
        }
    }

    /// Occupancy matrix for the current rotation
    pub fn shape(&self) -> &'static Shape {
        get_shape(self.kind, self.rotation)
    }

    pub fn color(&self) -> Color {
        color(self.kind)
    }

    /// Check if the piece fits on the board at its anchor
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(self.shape(), self.x, self.y)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    fn rotated(self) -> Self {
        Self {
            rotation: (self.rotation + 1) % rotation_count(self.kind),
            ..self
        }
    }

    /// Absolute board coordinates of the piece's minos
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape()
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// What a gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece locked; the next piece was spawned (check `game_over`).
    Locked { lines_cleared: usize },
    /// The game is over; nothing changed.
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    score: u32,
    lines: u32,
    game_over: bool,
}

impl GameState {
    /// Start a game on an empty board with the first piece from `source`.
    pub fn new<S: PieceSource + ?Sized>(source: &mut S) -> Self {
        Self::with_board(Board::new(), source.next_kind())
    }

    /// Start a game on `board` by spawning `kind`, running the spawn check.
    pub fn with_board(board: Board, kind: PieceKind) -> Self {
        let active = Tetromino::new(kind);
        Self {
            board,
            active,
            score: 0,
            lines: 0,
            game_over: spawn_blocked(&board, &active),
        }
    }

    /// Place `active` on `board` as-is, without any spawn check.
    ///
    /// Used to set up fixtures and scripted positions.
    pub fn with_active(board: Board, active: Tetromino) -> Self {
        Self {
            board,
            active,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared so far
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Replace the active piece with a fresh one from `source`.
    ///
    /// The new piece must be able to descend from the spawn anchor until its
    /// top row reaches row 0; otherwise the game is over. This is stricter
    /// than a fit test at the anchor alone: with (4, 1) occupied, a T piece
    /// fits at (3, -2) but its stem cannot pass row 1, so the game ends. The
    /// failing piece is kept as the active piece and the board is left
    /// untouched.
    pub fn spawn_next<S: PieceSource + ?Sized>(&self, source: &mut S) -> Self {
        self.spawn(source, false)
    }

    /// Spawn step shared by [`GameState::spawn_next`] and locking.
    ///
    /// `locked_out` marks a lock that left cells above the board; the game
    /// ends even if the new piece could enter.
    fn spawn<S: PieceSource + ?Sized>(&self, source: &mut S, locked_out: bool) -> Self {
        if self.game_over {
            return *self;
        }

        let active = Tetromino::new(source.next_kind());
        let game_over = locked_out || spawn_blocked(&self.board, &active);
        if locked_out {
            log::info!("piece locked above the board: game over at score {}", self.score);
        } else if game_over {
            log::info!(
                "spawn blocked for {} piece: game over at score {}",
                active.kind.as_str(),
                self.score
            );
        }

        Self {
            active,
            game_over,
            ..*self
        }
    }

    /// Shift the active piece one column (`dx` is -1 or +1).
    pub fn move_horizontal(&self, dx: i8) -> Self {
        debug_assert!(dx == -1 || dx == 1, "dx must be -1 or 1, got {}", dx);
        self.try_replace(self.active.shifted(dx, 0))
    }

    /// Advance to the next rotation state in place. No kicks are tried.
    pub fn rotate(&self) -> Self {
        self.try_replace(self.active.rotated())
    }

    fn try_replace(&self, candidate: Tetromino) -> Self {
        if self.game_over || !candidate.fits(&self.board) {
            return *self;
        }
        Self {
            active: candidate,
            ..*self
        }
    }

    /// Move the piece down one row, locking it when it cannot fall.
    ///
    /// Also serves as the manual soft drop.
    pub fn gravity_tick<S: PieceSource + ?Sized>(&self, source: &mut S) -> Self {
        self.gravity_step(source).0
    }

    /// [`GameState::gravity_tick`], also reporting what happened.
    pub fn gravity_step<S: PieceSource + ?Sized>(&self, source: &mut S) -> (Self, TickOutcome) {
        if self.game_over {
            return (*self, TickOutcome::Ignored);
        }

        let dropped = self.active.shifted(0, 1);
        if dropped.fits(&self.board) {
            let next = Self {
                active: dropped,
                ..*self
            };
            return (next, TickOutcome::Fell);
        }

        let active = self.active;
        let locked_out = active.cells().any(|(_, y)| y < 0);
        let merged = self
            .board
            .merge(active.shape(), active.x, active.y, active.color());
        let (board, lines_cleared) = merged.clear_full_rows();

        log::debug!(
            "locked {} piece at ({}, {}) rotation {}, cleared {} line(s)",
            active.kind.as_str(),
            active.x,
            active.y,
            active.rotation,
            lines_cleared
        );

        let locked = Self {
            board,
            score: self.score.saturating_add(line_clear_score(lines_cleared)),
            lines: self.lines.saturating_add(lines_cleared as u32),
            ..*self
        };

        (locked.spawn(source, locked_out), TickOutcome::Locked { lines_cleared })
    }

    /// Apply one input signal
    pub fn apply_action<S: PieceSource + ?Sized>(
        &self,
        action: GameAction,
        source: &mut S,
    ) -> Self {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.gravity_tick(source),
            GameAction::RotateCw => self.rotate(),
        }
    }

    /// Write the render view (board merged with the active piece) into `out`.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.rows();

        let color = self.active.color();
        for (x, y) in self.active.cells() {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                out.board[y as usize][x as usize] = Some(color);
            }
        }

        out.active = ActiveSnapshot::from(self.active);
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Whether `piece` cannot enter the board from its spawn anchor.
///
/// Checks every row of the straight descent until the shape's top row reaches
/// row 0, starting with the anchor itself.
fn spawn_blocked(board: &Board, piece: &Tetromino) -> bool {
    let shape = piece.shape();
    (piece.y..=piece.y.max(0)).any(|y| !board.can_place(shape, piece.x, y))
}
