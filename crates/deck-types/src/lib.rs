pub mod auth;
pub mod deck;

pub use auth::*;
pub use deck::*;
