use std::sync::{Arc, RwLock};

/// Key the bearer token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Persistent home of the session token.
///
/// Implementations never fail loudly: an unreadable store reads as "no
/// token", a failed write is logged and dropped.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// Process-local store, used off the browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set(&self, token: &str) {
        match self.token.write() {
            Ok(mut guard) => *guard = Some(token.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(token.to_string()),
        }
    }

    fn remove(&self) {
        match self.token.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

/// Browser `localStorage`, looked up on every access so the handle itself
/// stays `Send + Sync`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn set(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, token not saved");
            return;
        };
        if let Err(e) = storage.set_item(TOKEN_KEY, token) {
            tracing::warn!("failed to save token: {e:?}");
        }
    }

    fn remove(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(TOKEN_KEY) {
                tracing::warn!("failed to remove token: {e:?}");
            }
        }
    }
}

/// The store appropriate for the current target: `localStorage` in the
/// browser, memory everywhere else.
pub fn default_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorageTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryTokenStore::new())
    }
}
