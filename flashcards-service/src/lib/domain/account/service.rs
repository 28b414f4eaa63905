use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Session;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and session token issuing
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Session, AccountError> {
        let salt = self.authenticator.generate_salt();
        let password_hash = self
            .authenticator
            .hash_password(&command.password, &salt)?;
        let credentials = command.credentials();

        let account = self
            .repository
            .create(NewAccount {
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
                password_hash,
                salt,
            })
            .await?;
        tracing::info!(account_id = %account.id, "Account created");

        self.login(credentials).await
    }

    async fn login(&self, credentials: Credentials) -> Result<Session, AccountError> {
        let Some(account) = self.repository.find_by_email(&credentials.email).await? else {
            tracing::warn!(email = %credentials.email, "Failed login attempt: unknown email");
            self.authenticator
                .verify_unknown_account(&credentials.password);
            return Err(AccountError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(
                &credentials.password,
                &account.salt,
                &account.password_hash,
                account.id,
                Utc::now().timestamp(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(email = %credentials.email, "Failed login attempt");
                    AccountError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => AccountError::from(err),
            })?;

        Ok(Session {
            account,
            token: result.access_token,
            expires_at: result.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mockall::mock;

    use super::*;
    use crate::domain::account::models::Account;
    use crate::domain::account::models::AccountId;
    use crate::domain::account::models::EmailAddress;
    use crate::domain::account::models::PersonName;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(SECRET))
    }

    fn register_command(email: &str, password: &str) -> RegisterAccountCommand {
        RegisterAccountCommand::new(
            PersonName::new("firstName", "A".to_string()).unwrap(),
            PersonName::new("lastName", "B".to_string()).unwrap(),
            EmailAddress::new(email.to_string()).unwrap(),
            password.to_string(),
        )
    }

    fn stored_account(id: i64, email: &str, password: &str) -> Account {
        let authenticator = authenticator();
        let salt = authenticator.generate_salt();
        let password_hash = authenticator.hash_password(password, &salt).unwrap();

        Account {
            id: AccountId(id),
            first_name: PersonName::new("firstName", "A".to_string()).unwrap(),
            last_name: PersonName::new("lastName", "B".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash,
            salt,
        }
    }

    #[tokio::test]
    async fn test_register_success_logs_in() {
        let mut repository = MockTestAccountRepository::new();
        let stored: Arc<Mutex<Option<Account>>> = Arc::new(Mutex::new(None));

        let created = Arc::clone(&stored);
        repository
            .expect_create()
            .withf(|account| {
                account.email.as_str() == "a@b.com"
                    && account.salt.len() == 16
                    && account.password_hash.starts_with("$argon2")
                    && !account.password_hash.contains("pw123")
            })
            .times(1)
            .returning(move |account| {
                let account = account.into_account(AccountId(42));
                *created.lock().unwrap() = Some(account.clone());
                Ok(account)
            });

        let found = Arc::clone(&stored);
        repository
            .expect_find_by_email()
            .withf(|email| email == "a@b.com")
            .times(1)
            .returning(move |_| Ok(found.lock().unwrap().clone()));

        let authenticator = authenticator();
        let service = AccountService::new(Arc::new(repository), Arc::clone(&authenticator));

        let session = service
            .register(register_command("a@b.com", "pw123"))
            .await
            .expect("Registration failed");

        assert_eq!(session.account.id, AccountId(42));
        assert_eq!(session.account.email.as_str(), "a@b.com");

        let claims = authenticator
            .validate_session(&session.token, Utc::now().timestamp())
            .expect("Issued token is invalid");
        assert_eq!(claims.subject_as::<i64>(), Ok(42));
        assert_eq!(session.expires_at, claims.exp);
    }

    #[tokio::test]
    async fn test_register_salts_every_account_differently() {
        let mut repository = MockTestAccountRepository::new();
        let salts: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&salts);
        repository
            .expect_create()
            .times(2)
            .returning(move |account| {
                seen.lock().unwrap().push(account.salt.clone());
                Ok(account.into_account(AccountId(1)))
            });
        repository
            .expect_find_by_email()
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository), authenticator());

        // Immediate login misses in this mock; only the stored salts matter here
        let _ = service.register(register_command("a@b.com", "pw")).await;
        let _ = service.register(register_command("c@d.com", "pw")).await;

        let salts = salts.lock().unwrap();
        assert_eq!(salts.len(), 2);
        assert_ne!(salts[0], salts[1]);
    }

    #[tokio::test]
    async fn test_register_store_failure() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(AccountError::CreationFailed("duplicate key".to_string())));
        repository.expect_find_by_email().times(0);

        let service = AccountService::new(Arc::new(repository), authenticator());

        let result = service.register(register_command("a@b.com", "pw123")).await;
        assert!(matches!(result, Err(AccountError::CreationFailed(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repository = MockTestAccountRepository::new();
        let account = stored_account(7, "a@b.com", "pw123");

        let returned = account.clone();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let authenticator = authenticator();
        let service = AccountService::new(Arc::new(repository), Arc::clone(&authenticator));

        let session = service
            .login(Credentials {
                email: "a@b.com".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .expect("Login failed");

        assert_eq!(session.account, account);
        let claims = authenticator
            .validate_session(&session.token, Utc::now().timestamp())
            .unwrap();
        assert_eq!(claims.sub, Some("7".to_string()));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestAccountRepository::new();
        let account = stored_account(7, "a@b.com", "pw123");

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = AccountService::new(Arc::new(repository), authenticator());

        let result = service
            .login(Credentials {
                email: "a@b.com".to_string(),
                password: "not-the-password".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_indistinguishable() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository), authenticator());

        let result = service
            .login(Credentials {
                email: "nobody@b.com".to_string(),
                password: "pw123".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_store_failure() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(AccountError::DatabaseError("connection reset".to_string())));

        let service = AccountService::new(Arc::new(repository), authenticator());

        let result = service
            .login(Credentials {
                email: "a@b.com".to_string(),
                password: "pw123".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AccountError::DatabaseError(_))));
    }
}
