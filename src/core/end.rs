//! Per-end results.
//!
//! An `EndScore` is one row of the score sheet: the end number, each team's
//! points and the team that held the hammer while the end was played. At
//! most one team scores in an end; both zero is a blank end.

use serde::{Deserialize, Serialize};

use super::team::Team;

/// End number for a 0-based position in the end list.
///
/// Saturates at `u32::MAX` rather than wrapping.
#[must_use]
pub fn end_number(position: usize) -> u32 {
    u32::try_from(position).map_or(u32::MAX, |p| p.saturating_add(1))
}

/// Outcome of one end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndScore {
    /// 1-based end number.
    end: u32,

    team_a_score: u32,

    team_b_score: u32,

    /// Team throwing last stone in this end.
    hammer: Team,
}

impl EndScore {
    /// An end in which `team` scored `points`.
    ///
    /// Point limits are enforced by the engine, not here.
    #[must_use]
    pub fn scored(end: u32, team: Team, points: u32, hammer: Team) -> Self {
        let (team_a_score, team_b_score) = match team {
            Team::A => (points, 0),
            Team::B => (0, points),
        };
        Self {
            end,
            team_a_score,
            team_b_score,
            hammer,
        }
    }

    /// An end in which neither team scored.
    #[must_use]
    pub fn blank(end: u32, hammer: Team) -> Self {
        Self {
            end,
            team_a_score: 0,
            team_b_score: 0,
            hammer,
        }
    }

    /// End number (1-based).
    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    #[must_use]
    pub fn team_a_score(&self) -> u32 {
        self.team_a_score
    }

    #[must_use]
    pub fn team_b_score(&self) -> u32 {
        self.team_b_score
    }

    /// Points recorded for `team`.
    #[must_use]
    pub fn score_for(&self, team: Team) -> u32 {
        match team {
            Team::A => self.team_a_score,
            Team::B => self.team_b_score,
        }
    }

    /// Team that held the hammer during this end.
    #[must_use]
    pub fn hammer(&self) -> Team {
        self.hammer
    }

    /// True if neither team scored.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.team_a_score == 0 && self.team_b_score == 0
    }

    /// The team that scored, or `None` for a blank end.
    ///
    /// Team A wins the tie on a malformed record where both scored;
    /// `Game::validate` reports those.
    #[must_use]
    pub fn scoring_team(&self) -> Option<Team> {
        if self.team_a_score > 0 {
            Some(Team::A)
        } else if self.team_b_score > 0 {
            Some(Team::B)
        } else {
            None
        }
    }

    /// Points scored in the end (0 when blank).
    #[must_use]
    pub fn points(&self) -> u32 {
        self.team_a_score.max(self.team_b_score)
    }

    pub(crate) fn set_hammer(&mut self, hammer: Team) {
        self.hammer = hammer;
    }

    pub(crate) fn set_end(&mut self, end: u32) {
        self.end = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_end() {
        let end = EndScore::scored(3, Team::B, 2, Team::A);

        assert_eq!(end.end(), 3);
        assert_eq!(end.team_a_score(), 0);
        assert_eq!(end.team_b_score(), 2);
        assert_eq!(end.score_for(Team::B), 2);
        assert_eq!(end.hammer(), Team::A);
        assert_eq!(end.scoring_team(), Some(Team::B));
        assert_eq!(end.points(), 2);
        assert!(!end.is_blank());
    }

    #[test]
    fn test_blank_end() {
        let end = EndScore::blank(1, Team::B);

        assert!(end.is_blank());
        assert_eq!(end.scoring_team(), None);
        assert_eq!(end.points(), 0);
        assert_eq!(end.hammer(), Team::B);
    }

    #[test]
    fn test_end_number() {
        assert_eq!(end_number(0), 1);
        assert_eq!(end_number(9), 10);
        assert_eq!(end_number(u32::MAX as usize), u32::MAX);
    }

    #[test]
    fn test_field_names() {
        let end = EndScore::scored(1, Team::A, 3, Team::A);
        let json = serde_json::to_value(&end).unwrap();

        assert_eq!(json["end"], 1);
        assert_eq!(json["teamAScore"], 3);
        assert_eq!(json["teamBScore"], 0);
        assert_eq!(json["hammer"], "A");
    }
}
