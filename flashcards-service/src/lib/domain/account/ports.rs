use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Session;

/// Port for account (identity) service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account and log it in.
    ///
    /// # Arguments
    /// * `command` - Validated names, email and plaintext password
    ///
    /// # Returns
    /// Session for the new account, so the client needs no second round trip
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    /// * `CreationFailed` - Store rejected the account
    /// * `InvalidCredentials` - Immediate login failed
    /// * `Token` - Token signing failed
    async fn register(&self, command: RegisterAccountCommand) -> Result<Session, AccountError>;

    /// Verify credentials and issue a session.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `DatabaseError` - Lookup failed
    /// * `Token` - Token signing failed
    async fn login(&self, credentials: Credentials) -> Result<Session, AccountError>;
}

/// Credential store.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Returns
    /// Stored account with its assigned id
    ///
    /// # Errors
    /// * `CreationFailed` - Duplicate email or other store error
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Retrieve an account by its login email.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
}
