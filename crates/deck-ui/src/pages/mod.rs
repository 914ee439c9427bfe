pub mod auth;
pub mod dashboard;
pub mod deck;
pub mod study;
