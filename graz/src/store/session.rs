//! Per-session state: the cached Xion client, connected accounts and
//! connection status.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::Result;
use crate::wallet::Key;
use crate::wallet::xion::SharedAuthClient;

/// Connection status of the active wallet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// A wallet is connected.
    Connected,
    /// A connection attempt is in progress.
    Connecting,
    /// Restoring a previous session.
    Reconnecting,
    /// No wallet connected.
    #[default]
    Disconnected,
}

/// Session-scoped store.
///
/// Reads return clones, so no lock is held across an `.await`. The only
/// compound operation is [`get_or_init_xion_client`](Self::get_or_init_xion_client),
/// which is serialized by its own async mutex.
#[derive(Default)]
pub struct SessionStore {
    xion_client: RwLock<Option<SharedAuthClient>>,
    xion_init: Mutex<()>,
    accounts: RwLock<HashMap<String, Key>>,
    status: RwLock<ConnectionStatus>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_xion_client", &self.xion_client().is_some())
            .field("accounts", &self.account_addresses())
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Creates an empty, disconnected store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached Xion client, if one has been created.
    #[must_use]
    pub fn xion_client(&self) -> Option<SharedAuthClient> {
        self.xion_client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Cache `client`, replacing any previous one.
    pub fn set_xion_client(&self, client: SharedAuthClient) {
        let previous = self
            .xion_client
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(client);
        if previous.is_some() {
            debug!("replaced cached Xion client");
        }
    }

    /// Drop the cached client. Called by the manager on disconnect.
    pub fn clear_xion_client(&self) -> Option<SharedAuthClient> {
        self.xion_client
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Return the cached client, creating it with `init` if there is none.
    ///
    /// Concurrent callers are serialized: exactly one of them runs `init`,
    /// the rest receive the client it produced. `init` must not touch the
    /// client slot itself. A failing `init` caches nothing.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `init`.
    pub async fn get_or_init_xion_client<F, Fut>(&self, init: F) -> Result<SharedAuthClient>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<SharedAuthClient>> + Send,
    {
        if let Some(client) = self.xion_client() {
            return Ok(client);
        }

        let _guard = self.xion_init.lock().await;
        if let Some(client) = self.xion_client() {
            return Ok(client);
        }

        let client = init().await?;
        self.set_xion_client(Arc::clone(&client));
        Ok(client)
    }

    /// Snapshot of the account map, keyed by bech32 address.
    #[must_use]
    pub fn accounts(&self) -> HashMap<String, Key> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The account stored under `bech32_address`.
    #[must_use]
    pub fn account(&self, bech32_address: &str) -> Option<Key> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(bech32_address)
            .cloned()
    }

    /// Insert `key` under its bech32 address, keeping every other entry.
    pub fn merge_account(&self, key: Key) {
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.bech32_address.clone(), key);
    }

    /// Current connection status.
    #[must_use]
    pub fn status(&self) -> ConnectionStatus {
        *self.status.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the connection status.
    pub fn set_status(&self, status: ConnectionStatus) {
        *self.status.write().unwrap_or_else(PoisonError::into_inner) = status;
    }

    /// Forget everything: client, accounts and status.
    pub fn reset(&self) {
        self.clear_xion_client();
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.set_status(ConnectionStatus::Disconnected);
    }

    fn account_addresses(&self) -> Vec<String> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}
