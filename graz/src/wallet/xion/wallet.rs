//! [`Wallet`] implementation for the Xion account-abstraction wallet.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::client::{AuthClientFactory, SharedAuthClient};
use super::signer::XionOfflineSigner;
use crate::config::XionConfig;
use crate::constant::{RECONNECT_SESSION_ACTIVE, RECONNECT_SESSION_KEY};
use crate::error::Result;
use crate::store::{ConnectionStatus, WalletContext};
use crate::wallet::{
    ChainIds, ChainInfo, DirectSignResponse, Key, PartialSignDoc, SharedDirectSigner, Wallet,
    WalletError, WalletType,
};

/// Adapter connecting the Abstraxion auth client to the wallet manager.
///
/// Holds no connection state of its own: the client, accounts and status all
/// live in the [`WalletContext`] it was built with, so the manager can inspect
/// or reset them directly.
#[derive(Debug, Clone)]
pub struct XionWallet {
    context: Arc<WalletContext>,
    factory: Arc<dyn AuthClientFactory>,
    config: XionConfig,
}

impl XionWallet {
    /// Create an adapter with the default endpoint.
    #[must_use]
    pub fn new(context: Arc<WalletContext>, factory: Arc<dyn AuthClientFactory>) -> Self {
        Self {
            context,
            factory,
            config: XionConfig::default(),
        }
    }

    /// Use `config` instead of the defaults.
    #[must_use]
    pub fn with_config(mut self, config: XionConfig) -> Self {
        self.config = config;
        self
    }

    /// The context this adapter writes into.
    #[must_use]
    pub const fn context(&self) -> &Arc<WalletContext> {
        &self.context
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &XionConfig {
        &self.config
    }

    /// Construct and configure a new client, then cache it in the session
    /// store, replacing any previous one.
    ///
    /// Not idempotent: every call builds a new client. Use
    /// [`Wallet::enable`] to reuse an existing one.
    ///
    /// # Errors
    ///
    /// Returns the factory's or the client's error. Nothing is cached when
    /// configuration fails.
    pub async fn init_client(&self) -> Result<SharedAuthClient> {
        let client = self.create_client().await?;
        self.context.session().set_xion_client(Arc::clone(&client));
        Ok(client)
    }

    /// Build an offline signer over `client`.
    ///
    /// # Errors
    ///
    /// Fails with [`WalletError::ClientNotInitialized`] when `client` is
    /// `None`, or [`WalletError::AbstractAccountNotInitialized`] when it has
    /// no abstract account.
    pub fn create_offline_signer(client: Option<SharedAuthClient>) -> Result<SharedDirectSigner> {
        XionOfflineSigner::shared(client)
    }

    async fn create_client(&self) -> Result<SharedAuthClient> {
        let client = self.factory.create().await?;
        client.configure(&self.config.endpoint).await?;
        info!(endpoint = %self.config.endpoint, "Xion client initialized");
        Ok(client)
    }

    fn cached_client(&self) -> Result<SharedAuthClient> {
        Ok(self
            .context
            .session()
            .xion_client()
            .ok_or(WalletError::client_not_initialized(WalletType::Xion))?)
    }

    /// Key of the first account the client reports.
    async fn first_key(&self) -> Result<Key> {
        let client = self.cached_client()?;
        let Ok(account) = client.abstract_account().ready() else {
            return Err(WalletError::NoAccounts.into());
        };

        let accounts = account.get_accounts().await?;
        let first = accounts.first().ok_or(WalletError::NoAccounts)?;
        if accounts.len() > 1 {
            debug!(
                count = accounts.len(),
                address = %first.address,
                "multiple Xion accounts, using the first",
            );
        }
        Key::from_account(first)
    }
}

#[async_trait]
impl Wallet for XionWallet {
    fn wallet_type(&self) -> WalletType {
        WalletType::Xion
    }

    async fn init(&self) -> Result<()> {
        self.init_client().await.map(drop)
    }

    async fn enable(&self, chain_ids: &ChainIds) -> Result<()> {
        debug!(chain_ids = ?chain_ids, "enabling Xion");
        let client = self
            .context
            .session()
            .get_or_init_xion_client(|| self.create_client())
            .await?;
        client.login().await?;
        Ok(())
    }

    async fn on_after_login_successful(&self) -> Result<()> {
        let key = self.first_key().await?;
        let address = key.bech32_address.clone();

        let session = self.context.session();
        session.merge_account(key);
        self.context.internal().update(|state| {
            state.wallet_type = Some(WalletType::Xion);
            state.reconnect = false;
            state.reconnect_connector = Some(WalletType::Xion);
        });
        session.set_status(ConnectionStatus::Connected);

        if let Some(storage) = self.context.storage() {
            storage
                .set_item(RECONNECT_SESSION_KEY, RECONNECT_SESSION_ACTIVE)
                .await?;
        } else {
            debug!("no session storage, reconnect marker not written");
        }

        info!(address = %address, "Xion wallet connected");
        Ok(())
    }

    async fn get_key(&self, _chain_id: &str) -> Result<Key> {
        self.first_key().await
    }

    fn get_offline_signer_direct(&self, _chain_id: &str) -> Result<SharedDirectSigner> {
        Self::create_offline_signer(self.context.session().xion_client())
    }

    async fn get_offline_signer_auto(&self, _chain_id: &str) -> Result<SharedDirectSigner> {
        Self::create_offline_signer(self.context.session().xion_client())
    }

    fn get_offline_signer(&self, _chain_id: &str) -> Result<SharedDirectSigner> {
        Self::create_offline_signer(self.context.session().xion_client())
    }

    async fn sign_direct(
        &self,
        chain_id: &str,
        signer_address: &str,
        sign_doc: PartialSignDoc,
    ) -> Result<DirectSignResponse> {
        let signer = self.get_offline_signer_direct(chain_id)?;
        signer.sign_direct(signer_address, sign_doc.normalize()).await
    }

    async fn experimental_suggest_chain(&self, _chain_info: &ChainInfo) -> Result<()> {
        Err(WalletError::unsupported(WalletType::Xion, "experimentalSuggestChain").into())
    }
}
