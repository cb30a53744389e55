//! Error types for wallet operations.
//!
//! [`WalletError`] covers missing clients, empty account lists, unsupported
//! operations, account-number range failures and errors reported by the
//! external wallet client. It integrates into the crate-level
//! [`Error`](crate::Error) via `Error::Wallet`.

use super::WalletType;

/// Error type for wallet operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum WalletError {
    /// The wallet's client was used before it was created.
    #[error("{wallet} client is not initialized")]
    ClientNotInitialized {
        /// Wallet whose client is missing.
        wallet: WalletType,
    },

    /// The client exists but its abstract account is not configured.
    #[error("Abstract account is not initialized")]
    AbstractAccountNotInitialized,

    /// The wallet returned no accounts.
    #[error("No accounts found")]
    NoAccounts,

    /// The wallet has no concept of the requested operation.
    #[error("{wallet} does not support {operation}")]
    Unsupported {
        /// Wallet that rejected the call.
        wallet: WalletType,
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// An account number did not fit the 64-bit range callers expect.
    #[error("Account number out of range: {0}")]
    AccountNumberOverflow(String),

    /// Failure reported by the external wallet client.
    #[error("Client error: {0}")]
    Client(String),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(String),
}

impl WalletError {
    /// Create a client-not-initialized error.
    #[must_use]
    pub const fn client_not_initialized(wallet: WalletType) -> Self {
        Self::ClientNotInitialized { wallet }
    }

    /// Create an unsupported-operation error.
    #[must_use]
    pub const fn unsupported(wallet: WalletType, operation: &'static str) -> Self {
        Self::Unsupported { wallet, operation }
    }

    /// Create a client error.
    #[must_use]
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }

    /// Create a config error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
