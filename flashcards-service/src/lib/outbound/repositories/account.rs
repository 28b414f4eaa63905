use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::PersonName;
use crate::domain::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    salt: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId(row.id),
            first_name: PersonName::new("firstName", row.first_name)?,
            last_name: PersonName::new("lastName", row.last_name)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            salt: row.salt,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO accounts (first_name, last_name, email, password_hash, salt)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(account.first_name.as_str())
        .bind(account.last_name.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(&account.salt)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::CreationFailed(format!(
                        "email {} already registered",
                        account.email
                    ));
                }
            }
            AccountError::CreationFailed(e.to_string())
        })?;

        Ok(account.into_account(AccountId(id)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email, password_hash, salt
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }
}
