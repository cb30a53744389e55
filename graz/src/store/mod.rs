//! State containers wallet adapters write into.
//!
//! - [`SessionStore`]: cached wallet client, connected accounts, status.
//! - [`InternalStore`]: active wallet type and reconnect flags.
//! - [`SessionStorage`]: optional browser-style storage for the reconnect
//!   marker.
//!
//! [`WalletContext`] bundles the three and is shared by `Arc` between the
//! manager and its adapters.

mod internal;
mod session;
mod storage;

use std::sync::Arc;

pub use internal::{InternalState, InternalStore};
pub use session::{ConnectionStatus, SessionStore};
pub use storage::{InMemorySessionStorage, SessionStorage};

/// Shared session storage handle.
pub type SharedSessionStorage = Arc<dyn SessionStorage>;

/// Everything an adapter may read or write during a session.
#[derive(Debug, Default)]
pub struct WalletContext {
    session: SessionStore,
    internal: InternalStore,
    storage: Option<SharedSessionStorage>,
}

impl WalletContext {
    /// Creates a context without session storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach browser-style session storage.
    #[must_use]
    pub fn with_storage(mut self, storage: SharedSessionStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Session-scoped store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Manager-wide store.
    #[must_use]
    pub const fn internal(&self) -> &InternalStore {
        &self.internal
    }

    /// Session storage, when the host provides one.
    #[must_use]
    pub const fn storage(&self) -> Option<&SharedSessionStorage> {
        self.storage.as_ref()
    }
}
