//! Hammer possession.
//!
//! The team that scores gives up the hammer; after a blank end the hammer
//! stays where it was. `next_holder` is the only place that rule is
//! written down. Live scoring and history replay both go through it.
//!
//! Possession depends on the whole history, so changing who started with
//! the hammer means replaying every end from the first.

use im::Vector;

use crate::core::{EndScore, Game, Team};

/// Result of replaying a sequence of ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    /// Ends with their `hammer` field rewritten.
    pub ends: Vector<EndScore>,

    /// Holder for the end after the last one.
    pub next_holder: Team,
}

/// Recomputes hammer possession from a starting holder.
pub struct HammerResolver;

impl HammerResolver {
    /// Hammer holder for the end after `end`, given who held it during `end`.
    ///
    /// ```
    /// use curling_score::core::{EndScore, Team};
    /// use curling_score::rules::HammerResolver;
    ///
    /// let scored = EndScore::scored(1, Team::A, 2, Team::A);
    /// assert_eq!(HammerResolver::next_holder(Team::A, &scored), Team::B);
    ///
    /// let blank = EndScore::blank(2, Team::B);
    /// assert_eq!(HammerResolver::next_holder(Team::B, &blank), Team::B);
    /// ```
    #[must_use]
    pub fn next_holder(holder: Team, end: &EndScore) -> Team {
        match end.scoring_team() {
            Some(scorer) => scorer.other(),
            None => holder,
        }
    }

    /// Holder after all of `ends`, starting from `start`.
    #[must_use]
    pub fn final_holder<'a>(start: Team, ends: impl IntoIterator<Item = &'a EndScore>) -> Team {
        ends.into_iter()
            .fold(start, |holder, end| Self::next_holder(holder, end))
    }

    /// Replay `ends` in order from `start`, overwriting each end's hammer.
    #[must_use]
    pub fn replay(start: Team, ends: &Vector<EndScore>) -> Replay {
        let mut holder = start;
        let ends = ends
            .iter()
            .map(|end| {
                let mut end = end.clone();
                end.set_hammer(holder);
                holder = Self::next_holder(holder, &end);
                end
            })
            .collect();

        Replay {
            ends,
            next_holder: holder,
        }
    }

    /// Flip the game's initial hammer and replay every end under it.
    ///
    /// Applying this twice restores the original hammer state.
    #[must_use]
    pub fn switch(game: &Game) -> (Team, Replay) {
        let new_initial = game.initial_hammer().other();
        (new_initial, Self::replay(new_initial, game.ends()))
    }
}
