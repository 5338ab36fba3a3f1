//! Drive loop - feeds ticks and input into the core engine.
//!
//! The core has no clock and no threads. This crate supplies the plumbing a
//! frontend needs around it:
//!
//! - [`Driver`]: owns the current state and applies one [`Event`] at a time
//! - [`run_queue`]: drains a single-consumer channel of events in order
//! - [`Ticker`]: a thread delivering gravity ticks at a fixed interval
//!
//! Rendering and key binding stay outside; a frontend sends `Event`s and reads
//! back `GameSnapshot`s.

pub mod driver;
pub mod queue;
pub mod ticker;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use driver::{Driver, DriverStats, Event};
pub use queue::{run_queue, RunSummary, StopReason};
pub use ticker::Ticker;
