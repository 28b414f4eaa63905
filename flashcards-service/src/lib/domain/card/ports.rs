use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::card::errors::CardError;
use crate::domain::card::models::Card;
use crate::domain::card::models::CardContent;
use crate::domain::card::models::CardId;
use crate::domain::deck::models::DeckId;

/// Port for card service operations. Access goes through deck ownership.
#[async_trait]
pub trait CardServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `DeckNotFound` - Deck does not belong to `owner`
    async fn create_card(
        &self,
        owner: AccountId,
        deck_id: DeckId,
        content: CardContent,
    ) -> Result<Card, CardError>;

    /// # Errors
    /// * `NoCards` - Deck is empty or not owned by `owner`
    async fn list_cards(&self, owner: AccountId, deck_id: DeckId) -> Result<Vec<Card>, CardError>;

    /// # Errors
    /// * `NotFound` - Card is not in one of `owner`'s decks
    async fn update_card(
        &self,
        owner: AccountId,
        id: CardId,
        content: CardContent,
    ) -> Result<Card, CardError>;

    /// # Errors
    /// * `NotFound` - Card is not in one of `owner`'s decks
    async fn delete_card(&self, owner: AccountId, id: CardId) -> Result<(), CardError>;
}

/// Persistence operations for cards.
#[async_trait]
pub trait CardRepository: Send + Sync + 'static {
    /// # Returns
    /// Created card, or None when the deck does not belong to `owner`
    async fn create(
        &self,
        owner: AccountId,
        deck_id: DeckId,
        content: CardContent,
    ) -> Result<Option<Card>, CardError>;

    async fn list_by_deck(&self, owner: AccountId, deck_id: DeckId)
        -> Result<Vec<Card>, CardError>;

    /// # Returns
    /// Updated card, or None when not found for `owner`
    async fn update(
        &self,
        owner: AccountId,
        id: CardId,
        content: CardContent,
    ) -> Result<Option<Card>, CardError>;

    /// # Returns
    /// Whether a card was removed
    async fn delete(&self, owner: AccountId, id: CardId) -> Result<bool, CardError>;
}
