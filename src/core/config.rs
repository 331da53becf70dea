//! Match configuration.
//!
//! `MatchRules` carries the numbers the scoring engine checks against:
//! how many ends make a regulation game, how many points one end can
//! yield, how many sheets the club has and how wide the scoreboard is.
//! The defaults describe a standard club game.

use serde::{Deserialize, Serialize};

/// Ends in a standard game.
pub const REGULATION_ENDS: usize = 10;

/// Eight stones per team, so no end can score more than eight.
pub const MAX_POINTS_PER_END: u32 = 8;

/// Sheets of ice at the club.
pub const SHEET_COUNT: u8 = 5;

/// Score columns on the board.
pub const BOARD_COLUMNS: u32 = 14;

/// Rules the engine enforces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Ends after which a game completes automatically (default: 10).
    pub regulation_ends: usize,

    /// Largest score a team can record in one end (default: 8).
    pub max_points_per_end: u32,

    /// Highest valid sheet number; sheets are numbered from 1 (default: 5).
    pub sheet_count: u8,

    /// Number of score columns on the board (default: 14).
    /// Running totals beyond this are reported as overflow.
    pub board_columns: u32,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            regulation_ends: REGULATION_ENDS,
            max_points_per_end: MAX_POINTS_PER_END,
            sheet_count: SHEET_COUNT,
            board_columns: BOARD_COLUMNS,
        }
    }
}

impl MatchRules {
    /// Set the regulation game length.
    #[must_use]
    pub fn with_regulation_ends(mut self, ends: usize) -> Self {
        self.regulation_ends = ends;
        self
    }

    /// Set the per-end point cap.
    #[must_use]
    pub fn with_max_points(mut self, points: u32) -> Self {
        self.max_points_per_end = points;
        self
    }

    /// Set the number of sheets.
    #[must_use]
    pub fn with_sheet_count(mut self, count: u8) -> Self {
        self.sheet_count = count;
        self
    }

    /// Set the scoreboard width.
    #[must_use]
    pub fn with_board_columns(mut self, columns: u32) -> Self {
        self.board_columns = columns;
        self
    }

    /// Whether `points` is a legal score for a team in one end.
    #[must_use]
    pub fn points_valid(&self, points: u32) -> bool {
        (1..=self.max_points_per_end).contains(&points)
    }

    /// Whether `sheet` names a sheet that exists.
    #[must_use]
    pub fn sheet_valid(&self, sheet: u8) -> bool {
        (1..=self.sheet_count).contains(&sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = MatchRules::default();
        assert_eq!(rules.regulation_ends, 10);
        assert_eq!(rules.max_points_per_end, 8);
        assert_eq!(rules.sheet_count, 5);
        assert_eq!(rules.board_columns, 14);
    }

    #[test]
    fn test_rules_builder() {
        let rules = MatchRules::default()
            .with_regulation_ends(8)
            .with_max_points(6)
            .with_sheet_count(3)
            .with_board_columns(12);

        assert_eq!(rules.regulation_ends, 8);
        assert_eq!(rules.max_points_per_end, 6);
        assert_eq!(rules.sheet_count, 3);
        assert_eq!(rules.board_columns, 12);
    }

    #[test]
    fn test_points_valid() {
        let rules = MatchRules::default();
        assert!(!rules.points_valid(0));
        assert!(rules.points_valid(1));
        assert!(rules.points_valid(8));
        assert!(!rules.points_valid(9));
    }

    #[test]
    fn test_sheet_valid() {
        let rules = MatchRules::default();
        assert!(!rules.sheet_valid(0));
        assert!(rules.sheet_valid(1));
        assert!(rules.sheet_valid(5));
        assert!(!rules.sheet_valid(6));
    }

    #[test]
    fn test_rules_serialization() {
        let rules = MatchRules::default().with_regulation_ends(8);
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: MatchRules = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
