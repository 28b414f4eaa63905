use thiserror::Error;

use crate::domain::card::models::CardId;
use crate::domain::deck::models::DeckId;

/// Error type for CardId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardIdError {
    #[error("Invalid card id: {0}")]
    InvalidFormat(String),
}

/// Error type for card content validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardContentError {
    #[error("Question and answer are required")]
    Incomplete,
}

/// Top-level error type for all card-related operations
#[derive(Debug, Clone, Error)]
pub enum CardError {
    #[error("Invalid card id: {0}")]
    InvalidCardId(#[from] CardIdError),

    #[error("{0}")]
    InvalidContent(#[from] CardContentError),

    /// Deck does not exist or belongs to another account
    #[error("Deck not found: {0}")]
    DeckNotFound(DeckId),

    #[error("No flashcards found for deck {0}")]
    NoCards(DeckId),

    /// Card does not exist or sits in another account's deck
    #[error("Card not found: {0}")]
    NotFound(CardId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
