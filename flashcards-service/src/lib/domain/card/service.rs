use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::card::errors::CardError;
use crate::domain::card::models::Card;
use crate::domain::card::models::CardContent;
use crate::domain::card::models::CardId;
use crate::domain::card::ports::CardRepository;
use crate::domain::card::ports::CardServicePort;
use crate::domain::deck::models::DeckId;

/// Domain service implementation for card operations.
pub struct CardService<CR>
where
    CR: CardRepository,
{
    repository: Arc<CR>,
}

impl<CR> CardService<CR>
where
    CR: CardRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CardServicePort for CardService<CR>
where
    CR: CardRepository,
{
    async fn create_card(
        &self,
        owner: AccountId,
        deck_id: DeckId,
        content: CardContent,
    ) -> Result<Card, CardError> {
        self.repository
            .create(owner, deck_id, content)
            .await?
            .ok_or(CardError::DeckNotFound(deck_id))
    }

    async fn list_cards(&self, owner: AccountId, deck_id: DeckId) -> Result<Vec<Card>, CardError> {
        let cards = self.repository.list_by_deck(owner, deck_id).await?;
        if cards.is_empty() {
            return Err(CardError::NoCards(deck_id));
        }
        Ok(cards)
    }

    async fn update_card(
        &self,
        owner: AccountId,
        id: CardId,
        content: CardContent,
    ) -> Result<Card, CardError> {
        self.repository
            .update(owner, id, content)
            .await?
            .ok_or(CardError::NotFound(id))
    }

    async fn delete_card(&self, owner: AccountId, id: CardId) -> Result<(), CardError> {
        if self.repository.delete(owner, id).await? {
            Ok(())
        } else {
            Err(CardError::NotFound(id))
        }
    }
}
