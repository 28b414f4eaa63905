use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::account::models::AccountId;
use crate::domain::card::errors::CardError;
use crate::domain::card::models::Card;
use crate::domain::card::models::CardContent;
use crate::domain::card::models::CardId;
use crate::domain::card::ports::CardRepository;
use crate::domain::deck::models::DeckId;

/// Cards have no owner column; every statement joins `decks` on `account_id`.
pub struct PostgresCardRepository {
    pool: PgPool,
}

impl PostgresCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CardRow {
    id: i64,
    deck_id: i64,
    question: String,
    answer: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CardRow> for Card {
    type Error = CardError;

    fn try_from(row: CardRow) -> Result<Self, Self::Error> {
        Ok(Card {
            id: CardId(row.id),
            deck_id: DeckId(row.deck_id),
            content: CardContent::new(row.question, row.answer)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CardRepository for PostgresCardRepository {
    async fn create(
        &self,
        owner: AccountId,
        deck_id: DeckId,
        content: CardContent,
    ) -> Result<Option<Card>, CardError> {
        let row: Option<CardRow> = sqlx::query_as(
            r#"
            INSERT INTO cards (deck_id, question, answer)
            SELECT d.id, $3, $4
            FROM decks d
            WHERE d.id = $1 AND d.account_id = $2
            RETURNING id, deck_id, question, answer, created_at
            "#,
        )
        .bind(deck_id.0)
        .bind(owner.0)
        .bind(content.question())
        .bind(content.answer())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CardError::DatabaseError(e.to_string()))?;

        row.map(Card::try_from).transpose()
    }

    async fn list_by_deck(
        &self,
        owner: AccountId,
        deck_id: DeckId,
    ) -> Result<Vec<Card>, CardError> {
        let rows: Vec<CardRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.deck_id, c.question, c.answer, c.created_at
            FROM cards c
            JOIN decks d ON d.id = c.deck_id
            WHERE c.deck_id = $1 AND d.account_id = $2
            ORDER BY c.id
            "#,
        )
        .bind(deck_id.0)
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CardError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Card::try_from).collect()
    }

    async fn update(
        &self,
        owner: AccountId,
        id: CardId,
        content: CardContent,
    ) -> Result<Option<Card>, CardError> {
        let row: Option<CardRow> = sqlx::query_as(
            r#"
            UPDATE cards c
            SET question = $3, answer = $4
            FROM decks d
            WHERE c.id = $1 AND d.id = c.deck_id AND d.account_id = $2
            RETURNING c.id, c.deck_id, c.question, c.answer, c.created_at
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .bind(content.question())
        .bind(content.answer())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CardError::DatabaseError(e.to_string()))?;

        row.map(Card::try_from).transpose()
    }

    async fn delete(&self, owner: AccountId, id: CardId) -> Result<bool, CardError> {
        let result = sqlx::query(
            r#"
            DELETE FROM cards c
            USING decks d
            WHERE c.id = $1 AND d.id = c.deck_id AND d.account_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CardError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
