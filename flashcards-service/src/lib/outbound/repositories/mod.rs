pub mod account;
pub mod card;
pub mod deck;

pub use account::PostgresAccountRepository;
pub use card::PostgresCardRepository;
pub use deck::PostgresDeckRepository;
