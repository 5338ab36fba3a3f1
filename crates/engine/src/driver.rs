//! Driver - owns the current state and applies events one at a time.

use crate::core::{GameSnapshot, GameState, PieceSource, TickOutcome};
use crate::types::GameAction;

/// A stimulus delivered to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Input signal from the player (or a bot)
    Action(GameAction),
    /// Periodic gravity from the timer
    GravityTick,
}

impl From<GameAction> for Event {
    fn from(action: GameAction) -> Self {
        Event::Action(action)
    }
}

/// Counters kept by a [`Driver`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub events: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub pieces_locked: u64,
}

/// Serializes events onto a single current [`GameState`].
///
/// Each dispatch computes the next state from the current one and swaps it
/// in; callers never observe a half-applied operation.
#[derive(Debug)]
pub struct Driver<S> {
    state: GameState,
    source: S,
    stats: DriverStats,
}

impl<S: PieceSource> Driver<S> {
    /// Start a new game on an empty board.
    pub fn new(mut source: S) -> Self {
        let state = GameState::new(&mut source);
        Self::with_state(state, source)
    }

    /// Resume from an existing state.
    pub fn with_state(state: GameState, source: S) -> Self {
        Self {
            state,
            source,
            stats: DriverStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Apply one event. Returns `true` if the state changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        self.stats.events += 1;

        let next = match event {
            Event::Action(GameAction::SoftDrop) | Event::GravityTick => {
                let (next, outcome) = self.state.gravity_step(&mut self.source);
                if let TickOutcome::Locked { lines_cleared } = outcome {
                    self.stats.pieces_locked += 1;
                    if lines_cleared > 0 {
                        log::debug!(
                            "cleared {} line(s), score {}",
                            lines_cleared,
                            next.score()
                        );
                    }
                }
                next
            }
            Event::Action(action) => self.state.apply_action(action, &mut self.source),
        };

        let changed = next != self.state;
        if changed {
            self.stats.accepted += 1;
        } else {
            self.stats.rejected += 1;
            log::trace!("rejected {:?}", event);
        }

        self.state = next;
        changed
    }

    /// Consume the driver, keeping only the final state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}
