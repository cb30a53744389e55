//! Sign documents, signer responses and the offline-signer interface.
//!
//! Field names serialize in camelCase to match the shapes the connection
//! manager already persists and exchanges with wallets.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::key::Algo;
use crate::error::Result;

/// An account as reported by a wallet client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    /// Bech32 address.
    pub address: String,
    /// Public-key algorithm.
    pub algo: Algo,
    /// Public key bytes.
    pub pubkey: Vec<u8>,
}

impl AccountData {
    /// Create an account record.
    #[must_use]
    pub fn new(address: impl Into<String>, algo: Algo, pubkey: Vec<u8>) -> Self {
        Self {
            address: address.into(),
            algo,
            pubkey,
        }
    }
}

/// Direct-mode (protobuf) sign document.
///
/// `account_number` is the 64-bit representation callers use; wallet clients
/// that expect a wider integer convert at their own boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDoc {
    /// Serialized `TxBody`.
    pub body_bytes: Vec<u8>,
    /// Serialized `AuthInfo`.
    pub auth_info_bytes: Vec<u8>,
    /// Chain the transaction is for.
    pub chain_id: String,
    /// On-chain account number of the signer.
    pub account_number: u64,
}

/// A sign document whose fields may be missing.
///
/// [`normalize`](Self::normalize) fills the gaps: empty bytes, an empty chain
/// id and account number zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSignDoc {
    /// Serialized `TxBody`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_bytes: Option<Vec<u8>>,
    /// Serialized `AuthInfo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_info_bytes: Option<Vec<u8>>,
    /// Chain the transaction is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    /// On-chain account number of the signer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<u64>,
}

impl PartialSignDoc {
    /// Fill missing fields with their defaults.
    #[must_use]
    pub fn normalize(self) -> SignDoc {
        SignDoc {
            body_bytes: self.body_bytes.unwrap_or_default(),
            auth_info_bytes: self.auth_info_bytes.unwrap_or_default(),
            chain_id: self.chain_id.unwrap_or_default(),
            account_number: self.account_number.unwrap_or(0),
        }
    }
}

impl From<SignDoc> for PartialSignDoc {
    fn from(doc: SignDoc) -> Self {
        Self {
            body_bytes: Some(doc.body_bytes),
            auth_info_bytes: Some(doc.auth_info_bytes),
            chain_id: Some(doc.chain_id),
            account_number: Some(doc.account_number),
        }
    }
}

/// Public key attached to a signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    /// Amino type URL, e.g. `tendermint/PubKeySecp256k1`.
    #[serde(rename = "type")]
    pub type_url: String,
    /// Base64-encoded key.
    pub value: String,
}

/// A signature with its public key, both base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StdSignature {
    /// Signer's public key.
    pub pub_key: PubKey,
    /// Base64-encoded signature.
    pub signature: String,
}

impl StdSignature {
    /// Decoded signature bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Base64`](crate::Error::Base64) if the signature is not
    /// valid base64.
    pub fn signature_bytes(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.signature)?)
    }

    /// Decoded public key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Base64`](crate::Error::Base64) if the key is not
    /// valid base64.
    pub fn pub_key_bytes(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.pub_key.value)?)
    }
}

/// Result of a direct-mode signature: the document actually signed and the
/// signature over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectSignResponse {
    /// The signed document. Wallets may adjust fields (e.g. fees) before
    /// signing, so callers must broadcast this rather than their input.
    pub signed: SignDoc,
    /// Signature over `signed`.
    pub signature: StdSignature,
}

/// Chain description passed to
/// [`Wallet::experimental_suggest_chain`](super::Wallet::experimental_suggest_chain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    /// Chain id.
    pub chain_id: String,
    /// Display name.
    pub chain_name: String,
    /// RPC endpoint.
    pub rpc: String,
    /// REST (LCD) endpoint.
    pub rest: String,
    /// Remaining wallet-specific fields (currencies, bech32 config, fee tiers).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChainInfo {
    /// Parse a chain-registry style JSON description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if `json` is malformed or
    /// lacks a required field.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Signer that produces direct-mode signatures without a live connection.
#[async_trait]
pub trait OfflineDirectSigner: Send + Sync + fmt::Debug {
    /// Accounts this signer can sign for.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet cannot list its accounts.
    async fn get_accounts(&self) -> Result<Vec<AccountData>>;

    /// Sign `sign_doc` as `signer_address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet refuses or fails to sign.
    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: SignDoc,
    ) -> Result<DirectSignResponse>;
}

/// Type-erased offline signer.
pub type SharedDirectSigner = Arc<dyn OfflineDirectSigner>;
