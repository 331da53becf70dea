//! Scoring engine.
//!
//! Every operation takes the latest `Game` snapshot and returns a complete
//! replacement. The input is never modified. Guarded misuse (adding an end
//! to a finished game, undoing with no ends) returns an unchanged copy;
//! invalid input returns a `ScoreError`.

use tracing::{debug, trace, warn};

use super::hammer::HammerResolver;
use crate::core::end::end_number;
use crate::core::game::check_end_scores;
use crate::core::{EndScore, Game, GameDetails, MatchRules, Scorer};
use crate::error::{RecordError, ScoreError};

/// Applies curling scoring rules to game records.
#[derive(Clone, Debug, Default)]
pub struct GameScoreEngine {
    rules: MatchRules,
}

impl GameScoreEngine {
    /// Create an engine enforcing `rules`.
    #[must_use]
    pub fn new(rules: MatchRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Record the outcome of the next end.
    ///
    /// `points` is ignored for a blank end. For a scoring team it must be
    /// between 1 and the per-end maximum. The new end records the hammer
    /// holder going into it; the game completes once the regulation number
    /// of ends has been played.
    pub fn add_end(&self, game: &Game, scorer: Scorer, points: u32) -> Result<Game, ScoreError> {
        if scorer.team().is_some() && !self.rules.points_valid(points) {
            return Err(ScoreError::InvalidPoints {
                points,
                max: self.rules.max_points_per_end,
            });
        }

        if game.is_complete() {
            trace!(game_id = %game.id(), "Game complete, ignoring new end");
            return Ok(game.clone());
        }

        let number = game.next_end();
        let hammer = game.current_hammer();
        let end = match scorer.team() {
            Some(team) => EndScore::scored(number, team, points, hammer),
            None => EndScore::blank(number, hammer),
        };
        let recorded = end.points();
        let next_hammer = HammerResolver::next_holder(hammer, &end);

        let mut ends = game.ends().clone();
        ends.push_back(end);
        let complete = ends.len() >= self.rules.regulation_ends;

        let mut next = game.clone();
        next.set_ends(ends, next_hammer);
        next.set_complete(complete);

        debug!(
            game_id = %next.id(),
            end = number,
            ?scorer,
            points = recorded,
            hammer = %next_hammer,
            complete,
            "End recorded"
        );

        Ok(next)
    }

    /// Remove the last end.
    ///
    /// The hammer goes back to whoever held it in the removed end, and the
    /// game is reopened.
    #[must_use]
    pub fn undo_last_end(&self, game: &Game) -> Game {
        let mut ends = game.ends().clone();
        let Some(removed) = ends.pop_back() else {
            trace!(game_id = %game.id(), "No ends to undo");
            return game.clone();
        };

        let mut next = game.clone();
        next.set_ends(ends, removed.hammer());
        next.set_complete(false);

        debug!(
            game_id = %next.id(),
            end = removed.end(),
            hammer = %removed.hammer(),
            "End undone"
        );

        next
    }

    /// Mark a game finished, or reopen it.
    #[must_use]
    pub fn toggle_complete(&self, game: &Game) -> Game {
        let mut next = game.clone();
        next.set_complete(!game.is_complete());

        debug!(game_id = %next.id(), complete = next.is_complete(), "Completion toggled");

        next
    }

    /// Give the first-end hammer to the other team and replay every end.
    #[must_use]
    pub fn switch_initial_hammer(&self, game: &Game) -> Game {
        let (initial, replay) = HammerResolver::switch(game);

        let mut next = game.clone();
        next.set_initial_hammer(initial);
        next.set_ends(replay.ends, replay.next_holder);

        debug!(
            game_id = %next.id(),
            initial = %initial,
            current = %replay.next_holder,
            ends = next.end_count(),
            "Initial hammer switched"
        );

        next
    }

    /// Replace team names, sheet, league and date.
    ///
    /// Scores and hammer state are untouched.
    pub fn update_details(&self, game: &Game, details: GameDetails) -> Result<Game, ScoreError> {
        if !self.rules.sheet_valid(details.sheet_number) {
            return Err(ScoreError::InvalidSheet {
                sheet: details.sheet_number,
                max: self.rules.sheet_count,
            });
        }

        if game.details() == details {
            trace!(game_id = %game.id(), "Details unchanged");
            return Ok(game.clone());
        }

        let mut next = game.clone();
        next.set_details(details);

        debug!(game_id = %next.id(), "Details updated");

        Ok(next)
    }

    /// Rebuild derived fields of a record from its ends.
    ///
    /// Renumbers ends from 1, replays hammer possession from the initial
    /// hammer and recomputes totals. Completion is left as recorded.
    ///
    /// Per-end scores are the source of truth and cannot be repaired: an
    /// end where both teams scored, or with more points than one end can
    /// yield, is returned as a `RecordError` (numbered by position).
    pub fn resync(&self, game: &Game) -> Result<Game, RecordError> {
        let mut ends = game.ends().clone();
        for (position, end) in ends.iter_mut().enumerate() {
            let number = end_number(position);
            check_end_scores(end, number, &self.rules)?;
            end.set_end(number);
        }
        let replay = HammerResolver::replay(game.initial_hammer(), &ends);

        let mut next = game.clone();
        next.set_ends(replay.ends, replay.next_holder);

        if next != *game {
            warn!(game_id = %next.id(), "Record out of sync, derived fields rebuilt");
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameBuilder, GameId, League, Team};
    use time::macros::datetime;

    fn new_game(hammer: Team) -> Game {
        GameBuilder::new(GameId::new("test").unwrap(), datetime!(2024-02-05 19:00 UTC))
            .teams("Red", "Yellow")
            .initial_hammer(hammer)
            .build(&MatchRules::default())
            .unwrap()
    }

    #[test]
    fn test_add_scoring_end() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::A);

        let next = engine.add_end(&game, Scorer::A, 2).unwrap();

        assert_eq!(next.end_count(), 1);
        let end = &next.ends()[0];
        assert_eq!(end.end(), 1);
        assert_eq!(end.team_a_score(), 2);
        assert_eq!(end.team_b_score(), 0);
        assert_eq!(end.hammer(), Team::A);
        assert_eq!(next.total_a_score(), 2);
        assert_eq!(next.current_hammer(), Team::B);

        // Input untouched
        assert_eq!(game.end_count(), 0);
        assert_eq!(game.current_hammer(), Team::A);
    }

    #[test]
    fn test_add_blank_end_ignores_points() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::B);

        let next = engine.add_end(&game, Scorer::Blank, 5).unwrap();

        assert!(next.ends()[0].is_blank());
        assert_eq!(next.total_a_score(), 0);
        assert_eq!(next.total_b_score(), 0);
        assert_eq!(next.current_hammer(), Team::B);
    }

    #[test]
    fn test_add_end_rejects_bad_points() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::A);

        assert_eq!(
            engine.add_end(&game, Scorer::B, 0),
            Err(ScoreError::InvalidPoints { points: 0, max: 8 })
        );
        assert_eq!(
            engine.add_end(&game, Scorer::A, 9),
            Err(ScoreError::InvalidPoints { points: 9, max: 8 })
        );
        assert!(engine.add_end(&game, Scorer::A, 8).is_ok());
    }

    #[test]
    fn test_add_end_to_complete_game_is_noop() {
        let engine = GameScoreEngine::default();
        let game = engine.toggle_complete(&new_game(Team::A));

        let next = engine.add_end(&game, Scorer::A, 1).unwrap();

        assert_eq!(next, game);
    }

    #[test]
    fn test_undo_restores_hammer_and_reopens() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::A);
        let game = engine.add_end(&game, Scorer::A, 3).unwrap();
        let game = engine.add_end(&game, Scorer::Blank, 0).unwrap();
        let game = engine.toggle_complete(&game);

        let undone = engine.undo_last_end(&game);

        assert_eq!(undone.end_count(), 1);
        assert_eq!(undone.current_hammer(), Team::B);
        assert_eq!(undone.total_a_score(), 3);
        assert!(!undone.is_complete());
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::A);

        assert_eq!(engine.undo_last_end(&game), game);
    }

    #[test]
    fn test_toggle_complete_only_flips_flag() {
        let engine = GameScoreEngine::default();
        let game = engine.add_end(&new_game(Team::A), Scorer::B, 2).unwrap();

        let done = engine.toggle_complete(&game);
        assert!(done.is_complete());
        assert_eq!(done.ends(), game.ends());
        assert_eq!(done.current_hammer(), game.current_hammer());

        let reopened = engine.toggle_complete(&done);
        assert_eq!(reopened, game);
    }

    #[test]
    fn test_switch_initial_hammer_without_ends() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::A);

        let switched = engine.switch_initial_hammer(&game);

        assert_eq!(switched.initial_hammer(), Team::B);
        assert_eq!(switched.current_hammer(), Team::B);
    }

    #[test]
    fn test_custom_regulation_length() {
        let engine = GameScoreEngine::new(MatchRules::default().with_regulation_ends(2));
        let game = new_game(Team::A);

        let game = engine.add_end(&game, Scorer::A, 1).unwrap();
        assert!(!game.is_complete());
        let game = engine.add_end(&game, Scorer::B, 1).unwrap();
        assert!(game.is_complete());
    }

    #[test]
    fn test_update_details() {
        let engine = GameScoreEngine::default();
        let game = engine.add_end(&new_game(Team::A), Scorer::A, 2).unwrap();

        let mut details = game.details();
        details.team_a_name = "Rink 1".to_string();
        details.sheet_number = 3;
        details.league = League::SundayDoubles;

        let next = engine.update_details(&game, details).unwrap();

        assert_eq!(next.team_a_name(), "Rink 1");
        assert_eq!(next.sheet_number(), 3);
        assert_eq!(next.league(), League::SundayDoubles);
        assert_eq!(next.ends(), game.ends());
        assert_eq!(next.total_a_score(), 2);
    }

    #[test]
    fn test_update_details_rejects_bad_sheet() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::A);

        let mut details = game.details();
        details.sheet_number = 7;

        assert_eq!(
            engine.update_details(&game, details),
            Err(ScoreError::InvalidSheet { sheet: 7, max: 5 })
        );
    }

    #[test]
    fn test_update_details_unchanged() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::A);

        assert_eq!(engine.update_details(&game, game.details()).unwrap(), game);
    }

    #[test]
    fn test_resync_of_consistent_game_is_identity() {
        let engine = GameScoreEngine::default();
        let game = new_game(Team::B);
        let game = engine.add_end(&game, Scorer::A, 1).unwrap();
        let game = engine.add_end(&game, Scorer::Blank, 0).unwrap();

        assert_eq!(engine.resync(&game), Ok(game));
    }
}
