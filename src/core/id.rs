//! Game identifiers.
//!
//! Ids are strings so any collision-resistant scheme fits. Characters the
//! remote store refuses in keys are replaced on construction.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::IdError;

/// Characters not allowed in store keys.
const UNSAFE_KEY_CHARS: [char; 6] = ['.', '#', '$', '[', ']', '/'];

/// Replacement for unsafe key characters.
const KEY_ESCAPE: char = '-';

/// Unique, immutable game identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Create an id from any string, escaping unsafe characters.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(escape_key(&raw)))
    }

    /// Create an id from a creation timestamp.
    ///
    /// ```
    /// use curling_score::core::GameId;
    /// use time::macros::datetime;
    ///
    /// let id = GameId::from_timestamp(datetime!(2024-03-04 19:30:15.250 UTC)).unwrap();
    /// assert_eq!(id.as_str(), "2024-03-04T19:30:15-25Z");
    /// ```
    pub fn from_timestamp(at: OffsetDateTime) -> Result<Self, IdError> {
        let stamp = at.format(&Rfc3339)?;
        Self::new(stamp)
    }

    /// The id as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn escape_key(raw: &str) -> String {
    raw.chars()
        .map(|c| if UNSAFE_KEY_CHARS.contains(&c) { KEY_ESCAPE } else { c })
        .collect()
}
