//! Unified error types for graz.
//!
//! [`Error`] is what every public operation returns. Wallet-level failures
//! (missing client, no accounts, unsupported operations) live in
//! [`WalletError`] and convert into `Error::Wallet`.

pub use crate::wallet::WalletError;

/// Result type alias for graz operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main error type for graz.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Wallet adapter error.
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// A bech32 address could not be decoded.
    #[error("Bech32 error: {0}")]
    Bech32(#[from] bech32::DecodeError),

    /// A base64 payload could not be decoded.
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Borrow the inner [`WalletError`], if this is one.
    #[must_use]
    pub const fn as_wallet(&self) -> Option<&WalletError> {
        match self {
            Self::Wallet(e) => Some(e),
            _ => None,
        }
    }
}
