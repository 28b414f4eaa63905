use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::deck::errors::DeckError;
use crate::domain::deck::models::Deck;
use crate::domain::deck::models::DeckId;
use crate::domain::deck::models::DeckName;

/// Port for deck service operations. Every call is scoped to the owning account.
#[async_trait]
pub trait DeckServicePort: Send + Sync + 'static {
    async fn create_deck(&self, owner: AccountId, name: DeckName) -> Result<Deck, DeckError>;

    async fn list_decks(&self, owner: AccountId) -> Result<Vec<Deck>, DeckError>;

    /// # Errors
    /// * `NotFound` - No deck with this id belongs to `owner`
    async fn rename_deck(
        &self,
        owner: AccountId,
        id: DeckId,
        name: DeckName,
    ) -> Result<Deck, DeckError>;

    /// # Errors
    /// * `NotFound` - No deck with this id belongs to `owner`
    async fn delete_deck(&self, owner: AccountId, id: DeckId) -> Result<(), DeckError>;
}

/// Persistence operations for decks.
#[async_trait]
pub trait DeckRepository: Send + Sync + 'static {
    async fn create(&self, owner: AccountId, name: DeckName) -> Result<Deck, DeckError>;

    async fn list_by_owner(&self, owner: AccountId) -> Result<Vec<Deck>, DeckError>;

    /// # Returns
    /// Updated deck, or None when no deck with this id belongs to `owner`
    async fn rename(
        &self,
        owner: AccountId,
        id: DeckId,
        name: DeckName,
    ) -> Result<Option<Deck>, DeckError>;

    /// # Returns
    /// Whether a deck was removed
    async fn delete(&self, owner: AccountId, id: DeckId) -> Result<bool, DeckError>;
}
