//! Wallet capability interface shared by every adapter the manager drives.
//!
//! The connection manager talks to wallets only through [`Wallet`]. Each
//! adapter forwards those calls to its own client and writes the outcome into
//! the stores of the [`WalletContext`](crate::store::WalletContext) it was
//! built with.
//!
//! # Architecture
//!
//! ```text
//! AuthClientFactory ──create──▶ AbstraxionAuth (cached in SessionStore)
//!   → XionWallet::enable()                  → login
//!   → XionWallet::on_after_login_successful → Key merged into SessionStore,
//!                                             InternalStore marked Xion
//!   → XionWallet::get_offline_signer()      → XionOfflineSigner
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use graz::prelude::*;
//!
//! let context = Arc::new(WalletContext::new());
//! let wallet = XionWallet::new(Arc::clone(&context), factory);
//!
//! wallet.enable(&ChainIds::from("xion-mainnet-1")).await?;
//! wallet.on_after_login_successful().await?;
//! let key = wallet.get_key("xion-mainnet-1").await?;
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod error;
pub mod key;
pub mod signer;
pub mod xion;

pub use error::WalletError;
pub use key::{Algo, Key};
pub use signer::{
    AccountData, ChainInfo, DirectSignResponse, OfflineDirectSigner, PartialSignDoc, PubKey,
    SharedDirectSigner, SignDoc, StdSignature,
};
pub use xion::XionWallet;

use crate::error::Result;

/// Wallets the connection manager knows about.
///
/// Serialized as the lowercase tag the manager persists in its internal store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletType {
    /// Keplr browser extension.
    Keplr,
    /// Leap browser extension.
    Leap,
    /// Cosmostation browser extension.
    Cosmostation,
    /// Xion account-abstraction wallet (Abstraxion).
    Xion,
}

impl WalletType {
    /// Human-readable wallet name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keplr => "Keplr",
            Self::Leap => "Leap",
            Self::Cosmostation => "Cosmostation",
            Self::Xion => "Xion",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One chain id or several, as accepted by [`Wallet::enable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainIds {
    /// A single chain.
    One(String),
    /// Several chains enabled together.
    Many(Vec<String>),
}

impl ChainIds {
    /// The chain ids as a slice-like iterator.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let ids: &[String] = match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        };
        ids.iter().map(String::as_str)
    }
}

impl From<&str> for ChainIds {
    fn from(id: &str) -> Self {
        Self::One(id.to_owned())
    }
}

impl From<String> for ChainIds {
    fn from(id: String) -> Self {
        Self::One(id)
    }
}

impl From<Vec<String>> for ChainIds {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

impl From<&[&str]> for ChainIds {
    fn from(ids: &[&str]) -> Self {
        Self::Many(ids.iter().map(|id| (*id).to_owned()).collect())
    }
}

/// Capability set every wallet adapter exposes to the connection manager.
///
/// The three `get_offline_signer*` slots exist because the manager asks for
/// signers through three distinct entry points (sync direct, async auto, and
/// default); adapters whose wallet only signs one way return the same signer
/// from all three.
#[async_trait]
pub trait Wallet: Send + Sync + fmt::Debug {
    /// Which wallet this adapter drives.
    fn wallet_type(&self) -> WalletType;

    /// Prepare the wallet's client. Adapters without a client do nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created or configured.
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    /// Ask the wallet to connect for the given chains.
    ///
    /// # Errors
    ///
    /// Returns the wallet's own error when the user rejects or login fails.
    async fn enable(&self, chain_ids: &ChainIds) -> Result<()>;

    /// Hook run by the manager once a redirect- or popup-based login returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the connected account cannot be read.
    async fn on_after_login_successful(&self) -> Result<()> {
        Ok(())
    }

    /// The active account's key for `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet is not connected or has no account.
    async fn get_key(&self, chain_id: &str) -> Result<Key>;

    /// Direct-mode (protobuf `SignDoc`) offline signer.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet's client is not ready.
    fn get_offline_signer_direct(&self, chain_id: &str) -> Result<SharedDirectSigner>;

    /// Signer chosen by the wallet for the connected key type.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet's client is not ready.
    async fn get_offline_signer_auto(&self, chain_id: &str) -> Result<SharedDirectSigner>;

    /// Default offline signer.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet's client is not ready.
    fn get_offline_signer(&self, chain_id: &str) -> Result<SharedDirectSigner>;

    /// Amino-only offline signer.
    ///
    /// # Errors
    ///
    /// Fails with [`WalletError::Unsupported`] unless the wallet signs amino.
    fn get_offline_signer_only_amino(&self, _chain_id: &str) -> Result<SharedDirectSigner> {
        Err(WalletError::unsupported(self.wallet_type(), "getOfflineSignerOnlyAmino").into())
    }

    /// Sign a (possibly partial) direct-mode document.
    ///
    /// # Errors
    ///
    /// Returns an error if the signer cannot be built or signing fails.
    async fn sign_direct(
        &self,
        chain_id: &str,
        signer_address: &str,
        sign_doc: PartialSignDoc,
    ) -> Result<DirectSignResponse>;

    /// Sign an amino JSON document.
    ///
    /// # Errors
    ///
    /// Fails with [`WalletError::Unsupported`] unless the wallet signs amino.
    async fn sign_amino(
        &self,
        _chain_id: &str,
        _signer_address: &str,
        _sign_doc: serde_json::Value,
    ) -> Result<serde_json::Value> {
        Err(WalletError::unsupported(self.wallet_type(), "signAmino").into())
    }

    /// Ask the wallet to add a chain it does not know.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet refuses or cannot add chains.
    async fn experimental_suggest_chain(&self, chain_info: &ChainInfo) -> Result<()>;
}

/// Type-erased wallet shared across the manager.
pub type SharedWallet = Arc<dyn Wallet>;
