//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under stable paths
//! (`blockfall::{core, engine, types}`) and hosts the headless autoplay
//! session used by the `blockfall` binary.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub mod sim;
