pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use argon2::SALT_LENGTH;
pub use errors::PasswordError;
