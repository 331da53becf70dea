//! Scoreboard data.
//!
//! A club scoreboard has one row per team and numbered score columns. When
//! a team scores, the end number is hung under the column matching the
//! team's new running total. This module computes where those markers go;
//! drawing them is up to the caller.

use crate::core::{Game, MatchRules, Team};

/// One end number hung on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardMarker {
    /// End in which the team scored.
    pub end: u32,

    /// Team's cumulative score after that end; selects the column.
    pub running_total: u32,
}

/// What the board shows for the next end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndLabel {
    /// A regulation end, by number.
    Regular(u32),
    /// Past regulation, playing to break a tie.
    Extra,
    /// The game is over.
    Final,
}

impl std::fmt::Display for EndLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndLabel::Regular(n) => write!(f, "End {}", n),
            EndLabel::Extra => write!(f, "Extra End"),
            EndLabel::Final => write!(f, "Final"),
        }
    }
}

/// A team's row on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRow {
    pub team: Team,
    pub name: String,
    pub total: u32,
    /// True when this team throws last in the next end.
    pub has_hammer: bool,
    /// Markers in end order.
    pub markers: Vec<BoardMarker>,
}

/// Derived, read-only scoreboard for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    rows: [TeamRow; 2],
    columns: u32,
    label: EndLabel,
}

impl Scoreboard {
    /// Compute the board for `game`.
    #[must_use]
    pub fn new(game: &Game, rules: &MatchRules) -> Self {
        let hammer = (!game.is_complete()).then(|| game.current_hammer());
        let rows = Team::BOTH.map(|team| TeamRow {
            team,
            name: game.team_name(team).to_string(),
            total: game.total_for(team),
            has_hammer: hammer == Some(team),
            markers: markers_for(game, team),
        });

        let label = if game.is_complete() {
            EndLabel::Final
        } else if game.end_count() >= rules.regulation_ends {
            EndLabel::Extra
        } else {
            EndLabel::Regular(game.next_end())
        };

        Self {
            rows,
            columns: rules.board_columns,
            label,
        }
    }

    /// Row for `team`.
    #[must_use]
    pub fn row(&self, team: Team) -> &TeamRow {
        match team {
            Team::A => &self.rows[0],
            Team::B => &self.rows[1],
        }
    }

    /// Both rows, team A first.
    #[must_use]
    pub fn rows(&self) -> &[TeamRow; 2] {
        &self.rows
    }

    /// Number of score columns.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn label(&self) -> EndLabel {
        self.label
    }

    /// End numbers hung under `column` (1-based) for `team`.
    ///
    /// Empty when the column is off the board.
    #[must_use]
    pub fn ends_at(&self, team: Team, column: u32) -> Vec<u32> {
        if column == 0 || column > self.columns {
            return Vec::new();
        }
        self.row(team)
            .markers
            .iter()
            .filter(|m| m.running_total == column)
            .map(|m| m.end)
            .collect()
    }

    /// Markers whose running total is past the last column.
    #[must_use]
    pub fn overflow(&self, team: Team) -> Vec<BoardMarker> {
        self.row(team)
            .markers
            .iter()
            .filter(|m| m.running_total > self.columns)
            .copied()
            .collect()
    }

    /// Team ahead on points, or `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Team> {
        let (a, b) = (self.rows[0].total, self.rows[1].total);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Team::A),
            std::cmp::Ordering::Less => Some(Team::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Running totals at each end where `team` scored.
fn markers_for(game: &Game, team: Team) -> Vec<BoardMarker> {
    let mut running_total: u32 = 0;
    let mut markers = Vec::new();
    for end in game.ends() {
        let points = end.score_for(team);
        running_total = running_total.saturating_add(points);
        if points > 0 {
            markers.push(BoardMarker {
                end: end.end(),
                running_total,
            });
        }
    }
    markers
}
