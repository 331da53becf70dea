//! Record types: teams, ends, games, leagues, ids and match rules.
//!
//! These are plain values. The derived fields of a `Game` (totals, current
//! hammer) only change through `rules::GameScoreEngine`.

pub mod team;
pub mod end;
pub mod league;
pub mod id;
pub mod config;
pub mod game;

pub use team::{Scorer, Team};
pub use end::EndScore;
pub use league::League;
pub use id::GameId;
pub use config::MatchRules;
pub use game::{Game, GameBuilder, GameDetails};
