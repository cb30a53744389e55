//! Interface of the Abstraxion auth client the Xion adapter drives.
//!
//! The client owns the whole authentication protocol, account derivation and
//! signing. The adapter only needs the calls below, so any implementation
//! (a wasm binding, a remote signer, [`MockAuthClient`](super::MockAuthClient))
//! can be plugged in through an [`AuthClientFactory`].

use std::fmt;
use std::sync::Arc;

use alloy::primitives::U256;
use async_trait::async_trait;

use crate::wallet::{AccountData, StdSignature, WalletError};

/// Shared handle to an auth client.
pub type SharedAuthClient = Arc<dyn AbstraxionAuth>;

/// Shared handle to a client's abstract account.
pub type SharedAbstractAccount = Arc<dyn AbstractAccount>;

/// Sign document in the client's own shape: the account number is a
/// 256-bit integer rather than the `u64` callers use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSignDoc {
    /// Serialized `TxBody`.
    pub body_bytes: Vec<u8>,
    /// Serialized `AuthInfo`.
    pub auth_info_bytes: Vec<u8>,
    /// Chain the transaction is for.
    pub chain_id: String,
    /// On-chain account number of the signer.
    pub account_number: U256,
}

/// What the client returns from [`AbstractAccount::sign_direct`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSignResponse {
    /// The document actually signed.
    pub signed: ClientSignDoc,
    /// Signature over `signed`.
    pub signature: StdSignature,
}

/// Whether the client's account-abstraction capability is usable.
#[derive(Debug, Clone)]
pub enum AbstractAccountState {
    /// The client has not set up an abstract account (not logged in yet, or
    /// the session was revoked).
    NotConfigured,
    /// Ready to list accounts and sign.
    Ready(SharedAbstractAccount),
}

impl AbstractAccountState {
    /// The account, or [`WalletError::AbstractAccountNotInitialized`].
    ///
    /// # Errors
    ///
    /// Fails when the state is [`NotConfigured`](Self::NotConfigured).
    pub fn ready(self) -> Result<SharedAbstractAccount, WalletError> {
        match self {
            Self::Ready(account) => Ok(account),
            Self::NotConfigured => Err(WalletError::AbstractAccountNotInitialized),
        }
    }
}

/// The Abstraxion auth client.
#[async_trait]
pub trait AbstraxionAuth: Send + Sync + fmt::Debug {
    /// Point the client at an RPC endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is rejected.
    async fn configure(&self, endpoint: &str) -> Result<(), WalletError>;

    /// Run the client's login flow.
    ///
    /// # Errors
    ///
    /// Returns the client's error when login is cancelled or fails.
    async fn login(&self) -> Result<(), WalletError>;

    /// Current account-abstraction capability.
    fn abstract_account(&self) -> AbstractAccountState;
}

/// Account-abstraction capability of a logged-in client.
#[async_trait]
pub trait AbstractAccount: Send + Sync + fmt::Debug {
    /// Accounts controlled by the session.
    ///
    /// # Errors
    ///
    /// Returns the client's error when accounts cannot be fetched.
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError>;

    /// Sign `sign_doc` as `signer_address`.
    ///
    /// # Errors
    ///
    /// Returns the client's error when signing fails.
    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: ClientSignDoc,
    ) -> Result<ClientSignResponse, WalletError>;
}

/// Builds fresh auth clients for the adapter.
#[async_trait]
pub trait AuthClientFactory: Send + Sync + fmt::Debug {
    /// Construct an unconfigured client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    async fn create(&self) -> Result<SharedAuthClient, WalletError>;
}

/// [`AuthClientFactory`] backed by a plain constructor function.
pub struct FnFactory<F>(F);

impl<F> FnFactory<F>
where
    F: Fn() -> SharedAuthClient + Send + Sync,
{
    /// Wrap `f`.
    #[must_use]
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> fmt::Debug for FnFactory<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFactory").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> AuthClientFactory for FnFactory<F>
where
    F: Fn() -> SharedAuthClient + Send + Sync,
{
    async fn create(&self) -> Result<SharedAuthClient, WalletError> {
        Ok((self.0)())
    }
}
