//! Error types.
//!
//! Misuse the engine can absorb (adding to a finished game, undoing with no
//! ends) is a no-op and never shows up here. These enums cover input the
//! engine refuses and records that break the scoring invariants.

use thiserror::Error;

use crate::core::{GameId, Team};

/// Rejected input to an engine operation. The game is left unchanged.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScoreError {
    #[error("Invalid score of {points} points; an end scores between 1 and {max}")]
    InvalidPoints { points: u32, max: u32 },

    #[error("Invalid sheet number {sheet}; sheets are numbered 1 to {max}")]
    InvalidSheet { sheet: u8, max: u8 },
}

/// A game record that does not satisfy the scoring invariants.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RecordError {
    #[error("Game id is empty")]
    EmptyId,

    #[error("Invalid sheet number {sheet}; sheets are numbered 1 to {max}")]
    InvalidSheet { sheet: u8, max: u8 },

    #[error("End at position {position} is numbered {found}")]
    EndNumbering { position: usize, found: u32 },

    #[error("Both teams scored in end {end}")]
    BothTeamsScored { end: u32 },

    #[error("End {end} records {points} points; the maximum is {max}")]
    PointsOutOfRange { end: u32, points: u32, max: u32 },

    #[error("{team} total is {recorded} but its ends sum to {expected}")]
    TotalMismatch {
        team: Team,
        recorded: u32,
        expected: u32,
    },

    #[error("End {end} records {recorded} with the hammer; replay gives {expected}")]
    HammerMismatch {
        end: u32,
        recorded: Team,
        expected: Team,
    },

    #[error("Current hammer is {recorded}; replay gives {expected}")]
    CurrentHammerMismatch { recorded: Team, expected: Team },
}

/// Failure building a `GameId`.
#[derive(Debug, Error)]
pub enum IdError {
    #[error("Game id is empty")]
    Empty,

    #[error("Failed to format creation timestamp: {source}")]
    Timestamp {
        #[from]
        source: time::error::Format,
    },
}

/// Failure loading or updating a stored game.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    #[error("Game not found: {0}")]
    NotFound(GameId),

    #[error("Score update rejected: {source}")]
    Score {
        #[from]
        source: ScoreError,
    },
}
