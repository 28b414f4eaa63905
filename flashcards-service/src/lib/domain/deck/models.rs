use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::models::AccountId;
use crate::domain::deck::errors::DeckIdError;
use crate::domain::deck::errors::DeckNameError;

/// Deck unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeckId(pub i64);

impl DeckId {
    /// Parse a deck ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    pub fn from_string(s: &str) -> Result<Self, DeckIdError> {
        s.parse::<i64>()
            .map(DeckId)
            .map_err(|e| DeckIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Deck name value object; may not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckName(String);

impl DeckName {
    pub fn new(name: String) -> Result<Self, DeckNameError> {
        if name.trim().is_empty() {
            return Err(DeckNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named collection of cards owned by one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: DeckId,
    pub owner: AccountId,
    pub name: DeckName,
    pub created_at: DateTime<Utc>,
}
