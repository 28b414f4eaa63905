//! Authentication utilities library
//!
//! Provides the credential and session primitives used by the flashcards service:
//! - Salted password hashing (Argon2id over `password + account salt`)
//! - HS256 session tokens with a fixed lifetime
//! - Authentication coordination
//!
//! All time-dependent operations take the current Unix timestamp as an argument.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let salt = hasher.generate_salt();
//! let hash = hasher.hash("my_password", &salt).unwrap();
//! assert!(hasher.verify("my_password", &salt, &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let now = 1_700_000_000;
//!
//! // Register: salt and hash password
//! let salt = auth.generate_salt();
//! let hash = auth.hash_password("password123", &salt).unwrap();
//!
//! // Login: verify and issue a session token for account 42
//! let session = auth.authenticate("password123", &salt, &hash, 42, now).unwrap();
//! assert_eq!(session.expires_at, now + 3600);
//!
//! // Validate token half an hour later
//! let claims = auth.validate_session(&session.access_token, now + 1800).unwrap();
//! assert_eq!(claims.subject_as::<i64>().unwrap(), 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use jwt::SESSION_TTL_SECONDS;
pub use password::PasswordError;
pub use password::PasswordHasher;
