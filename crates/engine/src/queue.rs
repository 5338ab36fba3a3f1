//! Single-consumer event loop.
//!
//! Producers (a [`Ticker`](crate::Ticker), an input thread, a bot) send
//! [`Event`]s over one `mpsc` channel; [`run_queue`] drains it in delivery
//! order on the calling thread. No reordering, coalescing or rate limiting.

use std::sync::mpsc::Receiver;

use crate::core::{GameSnapshot, PieceSource};
use crate::driver::{Driver, Event};

/// Why [`run_queue`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GameOver,
    /// Every sender was dropped.
    Disconnected,
    /// The event budget ran out.
    EventLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub reason: StopReason,
    pub events: u64,
    pub score: u32,
    pub lines: u32,
}

/// Drain `events` into `driver` until game over, disconnection, or
/// `max_events` events (if given).
///
/// `observer` is called with a fresh snapshot after every event that changed
/// the state.
pub fn run_queue<S, F>(
    driver: &mut Driver<S>,
    events: &Receiver<Event>,
    max_events: Option<u64>,
    mut observer: F,
) -> RunSummary
where
    S: PieceSource,
    F: FnMut(&GameSnapshot),
{
    let mut processed: u64 = 0;

    let reason = loop {
        if driver.game_over() {
            break StopReason::GameOver;
        }
        if max_events.is_some_and(|limit| processed >= limit) {
            break StopReason::EventLimit;
        }

        let Ok(event) = events.recv() else {
            break StopReason::Disconnected;
        };
        processed += 1;

        if driver.dispatch(event) {
            observer(&driver.snapshot());
        }
    };

    let state = driver.state();
    log::info!(
        "event loop stopped ({:?}) after {} events, score {}, lines {}",
        reason,
        processed,
        state.score(),
        state.lines()
    );

    RunSummary {
        reason,
        events: processed,
        score: state.score(),
        lines: state.lines(),
    }
}
