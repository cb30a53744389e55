//! Browser-style session storage.
//!
//! [`SessionStorage`] mirrors the `sessionStorage` surface the manager uses to
//! remember a live connection across page reloads. Hosts without such a
//! surface (servers, CLIs, tests) simply build their
//! [`WalletContext`](super::WalletContext) without one, and writes to it are
//! skipped.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;

/// String key-value storage scoped to one browsing session.
#[async_trait]
pub trait SessionStorage: Send + Sync + std::fmt::Debug {
    /// Value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    async fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-memory session storage backed by `tokio::sync::RwLock<HashMap>`.
///
/// Data is lost when the value is dropped.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    items: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}
