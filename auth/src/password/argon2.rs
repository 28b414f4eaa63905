use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;
use rand::distributions::Alphanumeric;
use rand::Rng;

use super::errors::PasswordError;

/// Length of the per-account application salt.
pub const SALT_LENGTH: usize = 16;

/// Password hashing implementation.
///
/// Every password is combined with a per-account alphanumeric salt before it
/// reaches Argon2id. Argon2 adds its own random salt and parameters to the PHC
/// output, so the stored hash plus the account salt is enough to verify.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher instance configured with Argon2id defaults
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh account salt.
    ///
    /// # Returns
    /// 16 characters sampled uniformly from `[A-Za-z0-9]`
    pub fn generate_salt(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SALT_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Hash a plaintext password together with its account salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    /// * `salt` - Account salt appended to the password
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str, salt: &str) -> Result<String, PasswordError> {
        let message = salted(password, salt);
        let phc_salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(message.as_bytes(), &phc_salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password attempt against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password attempt
    /// * `salt` - Account salt stored alongside the hash
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if the attempt matches; false on mismatch or an unparseable hash
    pub fn verify(&self, password: &str, salt: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(salted(password, salt).as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn salted(password: &str, salt: &str) -> String {
    let mut message = String::with_capacity(password.len() + salt.len());
    message.push_str(password);
    message.push_str(salt);
    message
}
