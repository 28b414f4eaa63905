use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::card::errors::CardContentError;
use crate::domain::card::errors::CardIdError;
use crate::domain::deck::models::DeckId;

/// Card unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub i64);

impl CardId {
    /// Parse a card ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    pub fn from_string(s: &str) -> Result<Self, CardIdError> {
        s.parse::<i64>()
            .map(CardId)
            .map_err(|e| CardIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Question and answer of a card; both required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    question: String,
    answer: String,
}

impl CardContent {
    pub fn new(question: String, answer: String) -> Result<Self, CardContentError> {
        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(CardContentError::Incomplete);
        }
        Ok(Self { question, answer })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// A single flashcard inside a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub deck_id: DeckId,
    pub content: CardContent,
    pub created_at: DateTime<Utc>,
}
