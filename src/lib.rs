//! # curling-score
//!
//! Scorekeeping for curling matches: per-end scores, hammer possession,
//! running totals and the data a scoreboard is drawn from.
//!
//! ## Design Principles
//!
//! 1. **Pure Operations**: Every engine call takes a `Game` snapshot and
//!    returns a complete replacement. Nothing is mutated in place and no
//!    state is kept between calls.
//!
//! 2. **Derived Fields Stay Derived**: Totals and the current hammer are
//!    recomputed from the end list on every change and cannot be set
//!    directly.
//!
//! 3. **One Hammer Rule**: The scoring team gives up the hammer; a blank end
//!    keeps it. Live scoring and history replay share the same function.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Ends live in an `im::Vector`, so a
//!   snapshot clone is O(1).
//!
//! - **No-ops Over Errors**: Adding to a finished game or undoing with no
//!   ends returns the game unchanged. Only bad input (points, sheet) errors.
//!
//! ## Modules
//!
//! - `core`: Teams, ends, games, leagues, ids, match rules
//! - `rules`: Scoring engine and hammer resolution
//! - `board`: Scoreboard markers derived from a game
//! - `store`: Storage seam and in-memory store
//! - `error`: Error types

pub mod core;
pub mod rules;
pub mod board;
pub mod store;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EndScore, Game, GameBuilder, GameDetails, GameId,
    League, MatchRules, Scorer, Team,
};

pub use crate::rules::{GameScoreEngine, HammerResolver, Replay};

pub use crate::board::{BoardMarker, EndLabel, Scoreboard, TeamRow};

pub use crate::store::{apply, GameStore, MemoryStore};

pub use crate::error::{IdError, RecordError, ScoreError, StoreError};
