use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::account::models::AccountId;
use crate::domain::deck::errors::DeckError;
use crate::domain::deck::models::Deck;
use crate::domain::deck::models::DeckId;
use crate::domain::deck::models::DeckName;
use crate::domain::deck::ports::DeckRepository;

pub struct PostgresDeckRepository {
    pool: PgPool,
}

impl PostgresDeckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct DeckRow {
    id: i64,
    account_id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DeckRow> for Deck {
    type Error = DeckError;

    fn try_from(row: DeckRow) -> Result<Self, Self::Error> {
        Ok(Deck {
            id: DeckId(row.id),
            owner: AccountId(row.account_id),
            name: DeckName::new(row.name)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl DeckRepository for PostgresDeckRepository {
    async fn create(&self, owner: AccountId, name: DeckName) -> Result<Deck, DeckError> {
        let row: DeckRow = sqlx::query_as(
            r#"
            INSERT INTO decks (account_id, name)
            VALUES ($1, $2)
            RETURNING id, account_id, name, created_at
            "#,
        )
        .bind(owner.0)
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DeckError::DatabaseError(e.to_string()))?;

        Deck::try_from(row)
    }

    async fn list_by_owner(&self, owner: AccountId) -> Result<Vec<Deck>, DeckError> {
        let rows: Vec<DeckRow> = sqlx::query_as(
            r#"
            SELECT id, account_id, name, created_at
            FROM decks
            WHERE account_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DeckError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Deck::try_from).collect()
    }

    async fn rename(
        &self,
        owner: AccountId,
        id: DeckId,
        name: DeckName,
    ) -> Result<Option<Deck>, DeckError> {
        let row: Option<DeckRow> = sqlx::query_as(
            r#"
            UPDATE decks
            SET name = $3
            WHERE id = $1 AND account_id = $2
            RETURNING id, account_id, name, created_at
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DeckError::DatabaseError(e.to_string()))?;

        row.map(Deck::try_from).transpose()
    }

    async fn delete(&self, owner: AccountId, id: DeckId) -> Result<bool, DeckError> {
        let result = sqlx::query("DELETE FROM decks WHERE id = $1 AND account_id = $2")
            .bind(id.0)
            .bind(owner.0)
            .execute(&self.pool)
            .await
            .map_err(|e| DeckError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
