use thiserror::Error;

use crate::domain::deck::models::DeckId;

/// Error type for DeckId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckIdError {
    #[error("Invalid deck id: {0}")]
    InvalidFormat(String),
}

/// Error type for DeckName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckNameError {
    #[error("Deck name is required")]
    Empty,
}

/// Top-level error type for all deck-related operations
#[derive(Debug, Clone, Error)]
pub enum DeckError {
    #[error("Invalid deck id: {0}")]
    InvalidDeckId(#[from] DeckIdError),

    #[error("{0}")]
    InvalidDeckName(#[from] DeckNameError),

    /// Deck does not exist or belongs to another account
    #[error("Deck not found: {0}")]
    NotFound(DeckId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
