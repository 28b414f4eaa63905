use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::deck::errors::DeckError;
use crate::domain::deck::models::Deck;
use crate::domain::deck::models::DeckId;
use crate::domain::deck::models::DeckName;
use crate::domain::deck::ports::DeckRepository;
use crate::domain::deck::ports::DeckServicePort;

/// Domain service implementation for deck operations.
pub struct DeckService<DR>
where
    DR: DeckRepository,
{
    repository: Arc<DR>,
}

impl<DR> DeckService<DR>
where
    DR: DeckRepository,
{
    pub fn new(repository: Arc<DR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<DR> DeckServicePort for DeckService<DR>
where
    DR: DeckRepository,
{
    async fn create_deck(&self, owner: AccountId, name: DeckName) -> Result<Deck, DeckError> {
        let deck = self.repository.create(owner, name).await?;
        tracing::debug!(deck_id = %deck.id, account_id = %owner, "Deck created");
        Ok(deck)
    }

    async fn list_decks(&self, owner: AccountId) -> Result<Vec<Deck>, DeckError> {
        self.repository.list_by_owner(owner).await
    }

    async fn rename_deck(
        &self,
        owner: AccountId,
        id: DeckId,
        name: DeckName,
    ) -> Result<Deck, DeckError> {
        self.repository
            .rename(owner, id, name)
            .await?
            .ok_or(DeckError::NotFound(id))
    }

    async fn delete_deck(&self, owner: AccountId, id: DeckId) -> Result<(), DeckError> {
        if self.repository.delete(owner, id).await? {
            Ok(())
        } else {
            Err(DeckError::NotFound(id))
        }
    }
}
