//! Manager-wide state that outlives a single connection: which wallet is
//! active and how to reconnect it.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::wallet::WalletType;

/// Snapshot of the internal store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalState {
    /// Wallet the manager currently talks to.
    pub wallet_type: Option<WalletType>,
    /// Whether the manager should try to reconnect on its own.
    pub reconnect: bool,
    /// Wallet to use when reconnecting.
    pub reconnect_connector: Option<WalletType>,
}

/// Global store shared by every wallet adapter.
#[derive(Debug, Default)]
pub struct InternalStore {
    state: RwLock<InternalState>,
}

impl InternalStore {
    /// Creates a store with no active wallet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `state`.
    #[must_use]
    pub const fn with_state(state: InternalState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn state(&self) -> InternalState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Active wallet type.
    #[must_use]
    pub fn wallet_type(&self) -> Option<WalletType> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .wallet_type
    }

    /// Mutate the state in place; fields `f` leaves alone keep their values.
    pub fn update(&self, f: impl FnOnce(&mut InternalState)) {
        f(&mut self.state.write().unwrap_or_else(PoisonError::into_inner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_wallet() {
        let store = InternalStore::new();
        assert_eq!(store.wallet_type(), None);
        assert!(!store.state().reconnect);
    }

    #[test]
    fn update_merges() {
        let store = InternalStore::with_state(InternalState {
            wallet_type: Some(WalletType::Keplr),
            reconnect: true,
            reconnect_connector: Some(WalletType::Keplr),
        });

        store.update(|s| s.wallet_type = Some(WalletType::Xion));

        let state = store.state();
        assert_eq!(state.wallet_type, Some(WalletType::Xion));
        assert!(state.reconnect);
        assert_eq!(state.reconnect_connector, Some(WalletType::Keplr));
    }
}
