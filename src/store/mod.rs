//! Storage seam.
//!
//! The engine never stores anything. Whatever keeps games between calls
//! implements `GameStore`: it hands out the latest snapshot of a game and
//! accepts a full replacement on every change, last write wins.
//!
//! `MemoryStore` is the in-process implementation used by tests and by
//! callers that sync to a remote store on their own.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{Game, GameId};
use crate::error::{ScoreError, StoreError};

/// Full-replacement game storage.
pub trait GameStore {
    /// Latest snapshot of a game.
    fn get(&self, id: &GameId) -> Option<Game>;

    /// Store `game`, replacing any previous record with the same id.
    ///
    /// Returns the replaced record.
    fn put(&mut self, game: Game) -> Option<Game>;

    /// Delete a game.
    fn remove(&mut self, id: &GameId) -> Option<Game>;

    /// Ids of every stored game, in no particular order.
    fn ids(&self) -> Vec<GameId>;
}

/// Load a game, run `op` on it and store the result.
///
/// Nothing is written when `op` fails.
pub fn apply<S, F>(store: &mut S, id: &GameId, op: F) -> Result<Game, StoreError>
where
    S: GameStore + ?Sized,
    F: FnOnce(&Game) -> Result<Game, ScoreError>,
{
    let current = store
        .get(id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))?;
    let next = op(&current)?;

    if next != current {
        store.put(next.clone());
        debug!(game_id = %id, ends = next.end_count(), "Stored game update");
    }

    Ok(next)
}

#[derive(Clone, Debug)]
struct Entry {
    game: Game,
    revision: u64,
}

/// In-memory `GameStore`.
///
/// Each `put` bumps a per-game revision so pollers can tell whether a game
/// changed since they last looked.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<GameId, Entry>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Revision of a game; starts at 1 on first `put`.
    #[must_use]
    pub fn revision(&self, id: &GameId) -> Option<u64> {
        self.entries.get(id).map(|e| e.revision)
    }
}

impl GameStore for MemoryStore {
    fn get(&self, id: &GameId) -> Option<Game> {
        self.entries.get(id).map(|e| e.game.clone())
    }

    fn put(&mut self, game: Game) -> Option<Game> {
        let id = game.id().clone();
        let revision = self.revision(&id).unwrap_or(0) + 1;
        self.entries
            .insert(id, Entry { game, revision })
            .map(|e| e.game)
    }

    fn remove(&mut self, id: &GameId) -> Option<Game> {
        self.entries.remove(id).map(|e| e.game)
    }

    fn ids(&self) -> Vec<GameId> {
        self.entries.keys().cloned().collect()
    }
}
