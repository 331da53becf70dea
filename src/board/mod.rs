//! Scoreboard model derived from a game.

mod scoreboard;

pub use scoreboard::{BoardMarker, EndLabel, Scoreboard, TeamRow};
