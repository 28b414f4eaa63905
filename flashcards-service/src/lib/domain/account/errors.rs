use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid account id: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for a required input field that is absent or empty
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequiredFieldError {
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Top-level error for all account-related operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Invalid input: {0}")]
    MissingField(#[from] RequiredFieldError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Password(String),

    #[error("Session token error: {0}")]
    Token(String),

    /// The store refused the new account (duplicate email or other store error)
    #[error("Error creating account: {0}")]
    CreationFailed(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<auth::PasswordError> for AccountError {
    fn from(err: auth::PasswordError) -> Self {
        AccountError::Password(err.to_string())
    }
}

impl From<auth::JwtError> for AccountError {
    fn from(err: auth::JwtError) -> Self {
        AccountError::Token(err.to_string())
    }
}
