pub mod account;
pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub use account::{AccountSession, AuthUser, UserPersona, WatchlistShow};
pub use memory::MemorySessionStore;
pub use sqlite::SqliteSessionStore;

/// Key-value session persistence (what the browser client kept in local storage)
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;

    /// Drop every key
    async fn clear(&self) -> Result<()>;
}

/// Store `value` as JSON under `key`
pub async fn set_json<T: Serialize + Sync>(
    store: &dyn SessionStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json).await
}

/// Load a JSON value; `Ok(None)` when the key is missing
pub async fn get_json<T: DeserializeOwned>(store: &dyn SessionStore, key: &str) -> Result<Option<T>> {
    match store.get(key).await? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
