//! Canonical account key record handed to the connection manager.

use std::fmt;

use bech32::Bech32;
use bech32::primitives::decode::UncheckedHrpstring;
use serde::{Deserialize, Serialize};

use super::signer::AccountData;
use crate::error::Result;

/// Public-key algorithm of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algo {
    /// secp256k1 (the Cosmos default).
    Secp256k1,
    /// ed25519.
    Ed25519,
    /// sr25519.
    Sr25519,
}

impl Algo {
    /// Algorithm name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Ed25519 => "ed25519",
            Self::Sr25519 => "sr25519",
        }
    }
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connected account, normalized into the shape every wallet adapter
/// reports.
///
/// Entries in the session store's account map are keyed by
/// [`bech32_address`](Self::bech32_address).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    /// Raw address bytes (the bech32 payload).
    pub address: Vec<u8>,
    /// Human-readable bech32 address.
    pub bech32_address: String,
    /// Public-key algorithm.
    pub algo: Algo,
    /// Account display name. Empty when the wallet does not provide one.
    pub name: String,
    /// Public key bytes.
    pub pub_key: Vec<u8>,
    /// Whether the key lives on a Keystone device.
    pub is_keystone: bool,
    /// Whether the key lives on a Ledger Nano device.
    pub is_nano_ledger: bool,
}

impl Key {
    /// Project a wallet-reported account into a [`Key`].
    ///
    /// Software-only: both hardware flags are `false` and `name` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bech32`](crate::Error::Bech32) if the account address
    /// is not valid classic bech32. Bech32m checksums are rejected.
    pub fn from_account(account: &AccountData) -> Result<Self> {
        let checked = UncheckedHrpstring::new(&account.address)
            .map_err(bech32::DecodeError::Parse)?
            .validate_and_remove_checksum::<Bech32>()
            .map_err(bech32::DecodeError::Checksum)?;
        Ok(Self {
            address: checked.byte_iter().collect(),
            bech32_address: account.address.clone(),
            algo: account.algo,
            name: String::new(),
            pub_key: account.pubkey.clone(),
            is_keystone: false,
            is_nano_ledger: false,
        })
    }
}
