//! The game record.
//!
//! ## Game
//!
//! One match: team names, sheet, league, date, the ends played so far and
//! the fields derived from them (totals, current hammer). Fields are
//! private; totals and hammer state only change through `GameScoreEngine`,
//! which keeps them consistent with `ends`.
//!
//! ## GameBuilder
//!
//! Creates a fresh game with no ends. Empty team names fall back to
//! "Team A" / "Team B".
//!
//! ## Validation
//!
//! Records arriving from outside (a store, an import) may be stale or
//! hand-edited. `Game::validate` reports the first broken invariant.

use im::Vector;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use super::config::MatchRules;
use super::end::{end_number, EndScore};
use super::id::GameId;
use super::league::League;
use super::team::Team;
use crate::error::{IdError, RecordError, ScoreError};
use crate::rules::hammer::HammerResolver;

const DEFAULT_TEAM_A_NAME: &str = "Team A";
const DEFAULT_TEAM_B_NAME: &str = "Team B";

/// A curling match.
///
/// Uses `im::Vector` for the end list so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    id: GameId,

    league: League,

    team_a_name: String,

    team_b_name: String,

    sheet_number: u8,

    /// Ends in play order. The remote store drops empty lists.
    #[serde(default)]
    ends: Vector<EndScore>,

    total_a_score: u32,

    total_b_score: u32,

    #[serde(with = "time::serde::rfc3339")]
    date: OffsetDateTime,

    is_complete: bool,

    /// Hammer holder in end 1.
    initial_hammer: Team,

    /// Hammer holder for the next end.
    current_hammer: Team,
}

/// Editable descriptive fields of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameDetails {
    pub team_a_name: String,
    pub team_b_name: String,
    pub sheet_number: u8,
    pub league: League,
    pub date: OffsetDateTime,
}

impl Game {
    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn league(&self) -> League {
        self.league
    }

    #[must_use]
    pub fn team_a_name(&self) -> &str {
        &self.team_a_name
    }

    #[must_use]
    pub fn team_b_name(&self) -> &str {
        &self.team_b_name
    }

    /// Display name of `team`.
    #[must_use]
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a_name,
            Team::B => &self.team_b_name,
        }
    }

    #[must_use]
    pub fn sheet_number(&self) -> u8 {
        self.sheet_number
    }

    /// Ends played, in order.
    #[must_use]
    pub fn ends(&self) -> &Vector<EndScore> {
        &self.ends
    }

    /// Number of ends played.
    #[must_use]
    pub fn end_count(&self) -> usize {
        self.ends.len()
    }

    /// Number the next end will get.
    #[must_use]
    pub fn next_end(&self) -> u32 {
        end_number(self.ends.len())
    }

    #[must_use]
    pub fn total_a_score(&self) -> u32 {
        self.total_a_score
    }

    #[must_use]
    pub fn total_b_score(&self) -> u32 {
        self.total_b_score
    }

    /// Running total for `team`.
    #[must_use]
    pub fn total_for(&self, team: Team) -> u32 {
        match team {
            Team::A => self.total_a_score,
            Team::B => self.total_b_score,
        }
    }

    #[must_use]
    pub fn date(&self) -> OffsetDateTime {
        self.date
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    #[must_use]
    pub fn initial_hammer(&self) -> Team {
        self.initial_hammer
    }

    #[must_use]
    pub fn current_hammer(&self) -> Team {
        self.current_hammer
    }

    /// Snapshot of the editable fields.
    #[must_use]
    pub fn details(&self) -> GameDetails {
        GameDetails {
            team_a_name: self.team_a_name.clone(),
            team_b_name: self.team_b_name.clone(),
            sheet_number: self.sheet_number,
            league: self.league,
            date: self.date,
        }
    }

    // === Validation ===

    /// Check every scoring invariant against `rules`.
    ///
    /// Returns the first violation found. Games produced by the engine
    /// always pass.
    pub fn validate(&self, rules: &MatchRules) -> Result<(), RecordError> {
        if self.id.as_str().is_empty() {
            return Err(RecordError::EmptyId);
        }
        if !rules.sheet_valid(self.sheet_number) {
            return Err(RecordError::InvalidSheet {
                sheet: self.sheet_number,
                max: rules.sheet_count,
            });
        }

        for (position, end) in self.ends.iter().enumerate() {
            if end.end() != end_number(position) {
                return Err(RecordError::EndNumbering {
                    position,
                    found: end.end(),
                });
            }
            check_end_scores(end, end.end(), rules)?;
        }

        for team in Team::BOTH {
            let expected = sum_for(&self.ends, team);
            let recorded = self.total_for(team);
            if recorded != expected {
                return Err(RecordError::TotalMismatch {
                    team,
                    recorded,
                    expected,
                });
            }
        }

        let mut holder = self.initial_hammer;
        for end in &self.ends {
            if end.hammer() != holder {
                return Err(RecordError::HammerMismatch {
                    end: end.end(),
                    recorded: end.hammer(),
                    expected: holder,
                });
            }
            holder = HammerResolver::next_holder(holder, end);
        }
        if self.current_hammer != holder {
            return Err(RecordError::CurrentHammerMismatch {
                recorded: self.current_hammer,
                expected: holder,
            });
        }

        Ok(())
    }

    // === Engine access ===

    /// Replace the end list and everything derived from it.
    pub(crate) fn set_ends(&mut self, ends: Vector<EndScore>, current_hammer: Team) {
        self.total_a_score = sum_for(&ends, Team::A);
        self.total_b_score = sum_for(&ends, Team::B);
        self.ends = ends;
        self.current_hammer = current_hammer;
    }

    pub(crate) fn set_initial_hammer(&mut self, hammer: Team) {
        self.initial_hammer = hammer;
    }

    pub(crate) fn set_complete(&mut self, complete: bool) {
        self.is_complete = complete;
    }

    pub(crate) fn set_details(&mut self, details: GameDetails) {
        self.team_a_name = details.team_a_name;
        self.team_b_name = details.team_b_name;
        self.sheet_number = details.sheet_number;
        self.league = details.league;
        self.date = details.date;
    }
}

/// Check one end's scores against `rules`, reporting it as end `number`.
///
/// At most one team scores and no score exceeds the per-end maximum.
pub(crate) fn check_end_scores(
    end: &EndScore,
    number: u32,
    rules: &MatchRules,
) -> Result<(), RecordError> {
    if end.team_a_score() > 0 && end.team_b_score() > 0 {
        return Err(RecordError::BothTeamsScored { end: number });
    }
    if end.points() > rules.max_points_per_end {
        return Err(RecordError::PointsOutOfRange {
            end: number,
            points: end.points(),
            max: rules.max_points_per_end,
        });
    }
    Ok(())
}

/// Sum of `team`'s points across `ends`, saturating at `u32::MAX`.
pub(crate) fn sum_for(ends: &Vector<EndScore>, team: Team) -> u32 {
    ends.iter()
        .fold(0u32, |total, e| total.saturating_add(e.score_for(team)))
}

/// Builder for a new game.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    id: GameId,
    date: OffsetDateTime,
    team_a_name: String,
    team_b_name: String,
    sheet_number: u8,
    league: League,
    initial_hammer: Team,
}

impl GameBuilder {
    /// Start a game with the given id and creation time.
    pub fn new(id: GameId, date: OffsetDateTime) -> Self {
        Self {
            id,
            date,
            team_a_name: DEFAULT_TEAM_A_NAME.to_string(),
            team_b_name: DEFAULT_TEAM_B_NAME.to_string(),
            sheet_number: 1,
            league: League::default(),
            initial_hammer: Team::A,
        }
    }

    /// Start a game whose id is derived from its creation time.
    pub fn at(date: OffsetDateTime) -> Result<Self, IdError> {
        Ok(Self::new(GameId::from_timestamp(date)?, date))
    }

    /// Set team names. Blank names keep the defaults.
    #[must_use]
    pub fn teams(mut self, team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        let (a, b) = (team_a.into(), team_b.into());
        if !a.trim().is_empty() {
            self.team_a_name = a;
        }
        if !b.trim().is_empty() {
            self.team_b_name = b;
        }
        self
    }

    #[must_use]
    pub fn sheet(mut self, sheet: u8) -> Self {
        self.sheet_number = sheet;
        self
    }

    #[must_use]
    pub fn league(mut self, league: League) -> Self {
        self.league = league;
        self
    }

    /// Team with the hammer in the first end.
    #[must_use]
    pub fn initial_hammer(mut self, team: Team) -> Self {
        self.initial_hammer = team;
        self
    }

    /// Build the game, checking the sheet number against `rules`.
    pub fn build(self, rules: &MatchRules) -> Result<Game, ScoreError> {
        if !rules.sheet_valid(self.sheet_number) {
            return Err(ScoreError::InvalidSheet {
                sheet: self.sheet_number,
                max: rules.sheet_count,
            });
        }

        debug!(
            game_id = %self.id,
            sheet = self.sheet_number,
            league = %self.league,
            hammer = %self.initial_hammer,
            "Created game"
        );

        Ok(Game {
            id: self.id,
            league: self.league,
            team_a_name: self.team_a_name,
            team_b_name: self.team_b_name,
            sheet_number: self.sheet_number,
            ends: Vector::new(),
            total_a_score: 0,
            total_b_score: 0,
            date: self.date,
            is_complete: false,
            initial_hammer: self.initial_hammer,
            current_hammer: self.initial_hammer,
        })
    }
}
