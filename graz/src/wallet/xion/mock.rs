//! Mock auth client for testing.
//!
//! [`MockAuthClient`] returns canned accounts and signatures and records
//! every call, so adapter behaviour can be checked without a real Abstraxion
//! session.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use alloy::primitives::U256;
use async_trait::async_trait;

use super::client::{
    AbstractAccount, AbstractAccountState, AbstraxionAuth, AuthClientFactory, ClientSignDoc,
    ClientSignResponse, SharedAuthClient,
};
use crate::wallet::{AccountData, PubKey, StdSignature, WalletError};

#[derive(Debug)]
struct MockState {
    accounts: RwLock<Vec<AccountData>>,
    account_configured: AtomicBool,
    login_error: RwLock<Option<String>>,
    configure_error: RwLock<Option<String>>,
    signed_account_number: RwLock<Option<U256>>,
    endpoint: RwLock<Option<String>>,
    configure_calls: AtomicUsize,
    login_calls: AtomicUsize,
    sign_calls: AtomicUsize,
    last_sign: Mutex<Option<(String, ClientSignDoc)>>,
}

/// A scripted Abstraxion auth client.
///
/// # Example
///
/// ```rust,ignore
/// let client = MockAuthClient::new()
///     .with_accounts(vec![AccountData::new("xion1...", Algo::Secp256k1, pubkey)]);
/// client.login().await?;
/// assert_eq!(client.login_calls(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockAuthClient {
    state: Arc<MockState>,
}

impl Default for MockAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAuthClient {
    /// A client with a configured abstract account and no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(MockState {
                accounts: RwLock::new(Vec::new()),
                account_configured: AtomicBool::new(true),
                login_error: RwLock::new(None),
                configure_error: RwLock::new(None),
                signed_account_number: RwLock::new(None),
                endpoint: RwLock::new(None),
                configure_calls: AtomicUsize::new(0),
                login_calls: AtomicUsize::new(0),
                sign_calls: AtomicUsize::new(0),
                last_sign: Mutex::new(None),
            }),
        }
    }

    /// Accounts returned by `get_accounts`.
    #[must_use]
    pub fn with_accounts(self, accounts: Vec<AccountData>) -> Self {
        self.set_accounts(accounts);
        self
    }

    /// Report no abstract account.
    #[must_use]
    pub fn without_abstract_account(self) -> Self {
        self.set_abstract_account_configured(false);
        self
    }

    /// Make `login` fail with `message`.
    #[must_use]
    pub fn with_login_error(self, message: impl Into<String>) -> Self {
        *write(&self.state.login_error) = Some(message.into());
        self
    }

    /// Make `configure` fail with `message`.
    #[must_use]
    pub fn with_configure_error(self, message: impl Into<String>) -> Self {
        *write(&self.state.configure_error) = Some(message.into());
        self
    }

    /// Report `value` as the account number of every signed document,
    /// regardless of the input.
    #[must_use]
    pub fn with_signed_account_number(self, value: U256) -> Self {
        *write(&self.state.signed_account_number) = Some(value);
        self
    }

    /// Replace the account list.
    pub fn set_accounts(&self, accounts: Vec<AccountData>) {
        *write(&self.state.accounts) = accounts;
    }

    /// Toggle whether the abstract account is available.
    pub fn set_abstract_account_configured(&self, configured: bool) {
        self.state
            .account_configured
            .store(configured, Ordering::SeqCst);
    }

    /// Endpoint passed to the last `configure` call.
    #[must_use]
    pub fn endpoint(&self) -> Option<String> {
        read(&self.state.endpoint).clone()
    }

    /// Number of `configure` calls.
    #[must_use]
    pub fn configure_calls(&self) -> usize {
        self.state.configure_calls.load(Ordering::SeqCst)
    }

    /// Number of `login` calls.
    #[must_use]
    pub fn login_calls(&self) -> usize {
        self.state.login_calls.load(Ordering::SeqCst)
    }

    /// Number of `sign_direct` calls.
    #[must_use]
    pub fn sign_calls(&self) -> usize {
        self.state.sign_calls.load(Ordering::SeqCst)
    }

    /// Signer address and document of the last `sign_direct` call.
    #[must_use]
    pub fn last_sign_request(&self) -> Option<(String, ClientSignDoc)> {
        self.state
            .last_sign
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The fixed signature every `sign_direct` call returns.
    #[must_use]
    pub fn signature() -> StdSignature {
        StdSignature {
            pub_key: PubKey {
                type_url: "tendermint/PubKeySecp256k1".to_owned(),
                value: "AgICAgICAgICAgICAgICAgICAgICAgICAgICAgICAgIC".to_owned(),
            },
            signature: "c2lnbmF0dXJl".to_owned(),
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl AbstraxionAuth for MockAuthClient {
    async fn configure(&self, endpoint: &str) -> Result<(), WalletError> {
        self.state.configure_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = read(&self.state.configure_error).clone() {
            return Err(WalletError::client(message));
        }
        *write(&self.state.endpoint) = Some(endpoint.to_owned());
        Ok(())
    }

    async fn login(&self) -> Result<(), WalletError> {
        self.state.login_calls.fetch_add(1, Ordering::SeqCst);
        match read(&self.state.login_error).clone() {
            Some(message) => Err(WalletError::client(message)),
            None => Ok(()),
        }
    }

    fn abstract_account(&self) -> AbstractAccountState {
        if self.state.account_configured.load(Ordering::SeqCst) {
            AbstractAccountState::Ready(Arc::new(MockAbstractAccount(Arc::clone(&self.state))))
        } else {
            AbstractAccountState::NotConfigured
        }
    }
}

#[derive(Debug)]
struct MockAbstractAccount(Arc<MockState>);

#[async_trait]
impl AbstractAccount for MockAbstractAccount {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        Ok(read(&self.0.accounts).clone())
    }

    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: ClientSignDoc,
    ) -> Result<ClientSignResponse, WalletError> {
        self.0.sign_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .0
            .last_sign
            .lock()
            .unwrap_or_else(PoisonError::into_inner) =
            Some((signer_address.to_owned(), sign_doc.clone()));

        let mut signed = sign_doc;
        if let Some(value) = *read(&self.0.signed_account_number) {
            signed.account_number = value;
        }
        Ok(ClientSignResponse {
            signed,
            signature: MockAuthClient::signature(),
        })
    }
}

/// Factory handing out one shared [`MockAuthClient`], counting how often it
/// was asked.
#[derive(Debug, Default)]
pub struct MockClientFactory {
    client: MockAuthClient,
    created: AtomicUsize,
}

impl MockClientFactory {
    /// Factory returning `client` on every call.
    #[must_use]
    pub const fn new(client: MockAuthClient) -> Self {
        Self {
            client,
            created: AtomicUsize::new(0),
        }
    }

    /// The client this factory hands out.
    #[must_use]
    pub const fn client(&self) -> &MockAuthClient {
        &self.client
    }

    /// Number of `create` calls.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthClientFactory for MockClientFactory {
    async fn create(&self) -> Result<SharedAuthClient, WalletError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(self.client.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::wallet::Algo;

    #[tokio::test]
    async fn records_configure_and_login() {
        let client = MockAuthClient::new();
        client.configure("https://rpc.example").await.unwrap();
        client.login().await.unwrap();
        assert_eq!(client.configure_calls(), 1);
        assert_eq!(client.login_calls(), 1);
        assert_eq!(client.endpoint().as_deref(), Some("https://rpc.example"));
    }

    #[tokio::test]
    async fn scripted_errors() {
        let client = MockAuthClient::new()
            .with_login_error("popup closed")
            .with_configure_error("bad url");
        assert_eq!(
            client.login().await.unwrap_err(),
            WalletError::client("popup closed")
        );
        assert!(client.configure("x").await.is_err());
        assert!(client.endpoint().is_none());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let client = MockAuthClient::new();
        let other = client.clone();
        other.set_accounts(vec![AccountData::new("xion1a", Algo::Secp256k1, vec![])]);

        let account = client.abstract_account().ready().unwrap();
        assert_eq!(account.get_accounts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn factory_counts_creations() {
        let factory = MockClientFactory::new(MockAuthClient::new());
        factory.create().await.unwrap();
        factory.create().await.unwrap();
        assert_eq!(factory.created(), 2);
    }
}
