//! HTTP access to the flashcard backend.
//!
//! [`ApiClient`] attaches the stored bearer token to every request and
//! classifies each response into success, [`ApiError::Unauthorized`],
//! [`ApiError::RequestFailed`] or [`ApiError::Network`]. A 401 clears the
//! stored token; reacting to it (navigating to the login view) is left to
//! the caller.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod store;

pub use client::{bearer, ApiClient, RequestOptions};
pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use error::{ApiError, ApiResult, ApiSuccess};
pub use store::{default_store, MemoryTokenStore, TokenStore, TOKEN_KEY};

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageTokenStore;
