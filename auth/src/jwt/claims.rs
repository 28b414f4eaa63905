use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Lifetime of a session token.
pub const SESSION_TTL_SECONDS: i64 = 60 * 60;

/// Claims carried by a session token.
///
/// `sub` is optional on the wire so that a signed token without a subject is
/// reported as an identity problem rather than a malformed token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (stringified account identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims for a subject issued at `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Account identifier, stored in its string form
    /// * `issued_at` - Unix timestamp of issuance
    /// * `ttl_seconds` - Seconds until the token expires
    pub fn for_subject(subject: impl ToString, issued_at: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: Some(subject.to_string()),
            iat: issued_at,
            exp: issued_at + ttl_seconds,
        }
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// The expiry instant itself is already outside the validity window.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Parse the subject into a typed identifier.
    ///
    /// # Errors
    /// * `MissingClaim` - Token has no `sub`
    /// * `InvalidClaim` - `sub` does not parse as `T`
    pub fn subject_as<T>(&self) -> Result<T, JwtError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let sub = self
            .sub
            .as_deref()
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))?;

        sub.parse::<T>().map_err(|e| JwtError::InvalidClaim {
            claim: "sub".to_string(),
            reason: e.to_string(),
        })
    }
}
