//! Scoring rules.
//!
//! - `engine`: the operations that move a game from one state to the next
//! - `hammer`: the hammer transition rule and history replay
//!
//! Operations are pure: they take a `Game` and return a new one.

pub mod engine;
pub mod hammer;

pub use engine::GameScoreEngine;
pub use hammer::{HammerResolver, Replay};
