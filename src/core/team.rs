//! Team identification.
//!
//! A curling match is always played between two teams. The record format
//! calls them `A` and `B`; display names live on the `Game`.

use serde::{Deserialize, Serialize};

/// One side of a match.
///
/// Serialized as `"A"` / `"B"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Both teams, in scoreboard order.
    pub const BOTH: [Team; 2] = [Team::A, Team::B];

    /// The opposing team.
    ///
    /// ```
    /// use curling_score::core::Team;
    ///
    /// assert_eq!(Team::A.other(), Team::B);
    /// assert_eq!(Team::B.other(), Team::A);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => write!(f, "Team A"),
            Team::B => write!(f, "Team B"),
        }
    }
}

/// Who scored in an end, as entered by the scorekeeper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scorer {
    /// Team A scored.
    A,
    /// Team B scored.
    B,
    /// Neither team scored.
    Blank,
}

impl Scorer {
    /// The scoring team, or `None` for a blank end.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            Scorer::A => Some(Team::A),
            Scorer::B => Some(Team::B),
            Scorer::Blank => None,
        }
    }
}

impl From<Team> for Scorer {
    fn from(team: Team) -> Self {
        match team {
            Team::A => Scorer::A,
            Team::B => Scorer::B,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_other() {
        assert_eq!(Team::A.other(), Team::B);
        assert_eq!(Team::B.other(), Team::A);
        assert_eq!(Team::A.other().other(), Team::A);
    }

    #[test]
    fn test_team_display() {
        assert_eq!(format!("{}", Team::A), "Team A");
        assert_eq!(format!("{}", Team::B), "Team B");
    }

    #[test]
    fn test_scorer_team() {
        assert_eq!(Scorer::A.team(), Some(Team::A));
        assert_eq!(Scorer::B.team(), Some(Team::B));
        assert_eq!(Scorer::Blank.team(), None);
        assert_eq!(Scorer::from(Team::B), Scorer::B);
    }

    #[test]
    fn test_team_serialization() {
        assert_eq!(serde_json::to_string(&Team::A).unwrap(), "\"A\"");
        let team: Team = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(team, Team::B);
    }
}
