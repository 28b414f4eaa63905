use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SessionClaims;
use crate::jwt::SESSION_TTL_SECONDS;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Well-formed Argon2id hash that no password matches. Verified against when
/// the account does not exist so the lookup costs the same either way.
const UNKNOWN_ACCOUNT_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dW5rbm93bmFjY291bnQwMA$kmldDXIeF+O9+21WGICaURXjxU8xUl328RyUdlVLMNY";

/// Authentication coordinator combining password verification and session tokens.
///
/// Holds the only copy of the signing secret. Share it behind an `Arc`; every
/// method takes `&self` and none of them mutate state.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    session_ttl_seconds: i64,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
    /// Unix timestamp at which the token stops being accepted
    pub expires_at: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with the default one hour session lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            session_ttl_seconds: SESSION_TTL_SECONDS,
        }
    }

    /// Override the session lifetime.
    pub fn with_session_ttl(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    /// Generate a fresh per-account salt.
    pub fn generate_salt(&self) -> String {
        self.password_hasher.generate_salt()
    }

    /// Hash a salted password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str, salt: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password, salt)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password attempt
    /// * `salt` - Account salt
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Account identifier placed in `sub`
    /// * `now` - Current Unix timestamp
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        salt: &str,
        stored_hash: &str,
        subject: impl ToString,
        now: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, salt, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_session(subject, now)?)
    }

    /// Spend one full password verification on a login for an email with no
    /// account. The outcome is discarded.
    pub fn verify_unknown_account(&self, password: &str) {
        let _ = self
            .password_hasher
            .verify(password, "", UNKNOWN_ACCOUNT_HASH);
    }

    /// Issue a session token without password verification.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_session(
        &self,
        subject: impl ToString,
        now: i64,
    ) -> Result<AuthenticationResult, JwtError> {
        let claims = SessionClaims::for_subject(subject, now, self.session_ttl_seconds);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Verify a session token's signature and expiry.
    ///
    /// The subject is left unparsed; see [`SessionClaims::subject_as`].
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch or structural corruption
    /// * `TokenExpired` - `now` is at or past `exp`
    pub fn validate_session(&self, token: &str, now: i64) -> Result<SessionClaims, JwtError> {
        let claims: SessionClaims = self.jwt_handler.decode(token)?;

        if claims.is_expired(now) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
