pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::account;
pub use domain::card;
pub use domain::deck;
pub use outbound::repositories;
