//! Integration tests driving the Xion adapter through the `Wallet` trait.

#![allow(clippy::unwrap_used, clippy::panic, clippy::clone_on_ref_ptr)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::U256;
use async_trait::async_trait;
use bech32::{Bech32, Hrp};
use graz::prelude::*;
use graz::wallet::xion::{ClientSignDoc, ClientSignResponse, SharedAbstractAccount};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn xion_address(payload: &[u8]) -> String {
    bech32::encode::<Bech32>(Hrp::parse("xion").unwrap(), payload).unwrap()
}

/// A hand-written client whose abstract account only appears after login,
/// like the real one.
#[derive(Debug, Default)]
struct PopupClient {
    logged_in: std::sync::atomic::AtomicBool,
    logins: AtomicUsize,
}

#[derive(Debug)]
struct PopupAccount;

#[async_trait]
impl AbstraxionAuth for PopupClient {
    async fn configure(&self, endpoint: &str) -> Result<(), WalletError> {
        if endpoint.starts_with("https://") {
            Ok(())
        } else {
            Err(WalletError::config(format!("insecure endpoint: {endpoint}")))
        }
    }

    async fn login(&self) -> Result<(), WalletError> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        self.logged_in.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn abstract_account(&self) -> AbstractAccountState {
        if self.logged_in.load(Ordering::SeqCst) {
            let account: SharedAbstractAccount = Arc::new(PopupAccount);
            AbstractAccountState::Ready(account)
        } else {
            AbstractAccountState::NotConfigured
        }
    }
}

#[async_trait]
impl AbstractAccount for PopupAccount {
    async fn get_accounts(&self) -> Result<Vec<AccountData>, WalletError> {
        Ok(vec![AccountData::new(
            xion_address(&[0x11; 32]),
            Algo::Secp256k1,
            vec![3; 33],
        )])
    }

    async fn sign_direct(
        &self,
        _signer_address: &str,
        sign_doc: ClientSignDoc,
    ) -> Result<ClientSignResponse, WalletError> {
        // Bump the account number to prove the response, not the request,
        // is what comes back.
        let mut signed = sign_doc;
        signed.account_number += U256::from(1u8);
        Ok(ClientSignResponse {
            signed,
            signature: MockAuthClient::signature(),
        })
    }
}

fn popup_wallet(context: Arc<WalletContext>) -> (XionWallet, Arc<PopupClient>) {
    let client = Arc::new(PopupClient::default());
    let shared = client.clone();
    let factory = FnFactory::new(move || -> SharedAuthClient { shared.clone() });
    (XionWallet::new(context, Arc::new(factory)), client)
}

#[tokio::test]
async fn test_full_connect_flow() {
    init_tracing();
    let storage = Arc::new(InMemorySessionStorage::new());
    let context = Arc::new(WalletContext::new().with_storage(storage.clone()));
    let (xion, client) = popup_wallet(Arc::clone(&context));
    let wallet: SharedWallet = Arc::new(xion);

    assert_eq!(wallet.wallet_type(), WalletType::Xion);

    // Before login the client exists but has no abstract account.
    wallet.init().await.unwrap();
    let err = wallet.get_offline_signer("xion-mainnet-1").unwrap_err();
    assert!(matches!(
        err,
        Error::Wallet(WalletError::AbstractAccountNotInitialized)
    ));

    wallet
        .enable(&ChainIds::from("xion-mainnet-1"))
        .await
        .unwrap();
    assert_eq!(client.logins.load(Ordering::SeqCst), 1);

    wallet.on_after_login_successful().await.unwrap();

    let key = wallet.get_key("xion-mainnet-1").await.unwrap();
    assert_eq!(key.address, vec![0x11; 32]);
    assert_eq!(context.session().account(&key.bech32_address), Some(key));
    assert_eq!(context.session().status(), ConnectionStatus::Connected);
    assert_eq!(context.internal().wallet_type(), Some(WalletType::Xion));
    assert_eq!(
        storage.get_item(RECONNECT_SESSION_KEY).await.unwrap(),
        Some(RECONNECT_SESSION_ACTIVE.to_owned())
    );
}

#[tokio::test]
async fn test_sign_returns_signed_doc_from_client() {
    let context = Arc::new(WalletContext::new());
    let (wallet, _client) = popup_wallet(context);
    wallet.enable(&"xion-mainnet-1".into()).await.unwrap();

    let response = wallet
        .sign_direct(
            "xion-mainnet-1",
            "xion1signer",
            SignDoc {
                body_bytes: vec![1],
                auth_info_bytes: vec![2],
                chain_id: "xion-mainnet-1".into(),
                account_number: 41,
            }
            .into(),
        )
        .await
        .unwrap();

    assert_eq!(response.signed.account_number, 42);
    assert_eq!(response.signature.signature_bytes().unwrap(), b"signature");
}

#[tokio::test]
async fn test_insecure_endpoint_rejected_at_init() {
    let context = Arc::new(WalletContext::new());
    let (wallet, _client) = popup_wallet(Arc::clone(&context));
    let wallet = wallet.with_config(XionConfig::new().with_endpoint("http://localhost:26657"));

    let err = wallet.enable(&"xion-testnet-1".into()).await.unwrap_err();
    assert!(matches!(err, Error::Wallet(WalletError::Config(_))));
    assert!(context.session().xion_client().is_none());
}

#[tokio::test]
async fn test_manager_disconnect_resets_session() {
    let client = MockAuthClient::new().with_accounts(vec![AccountData::new(
        xion_address(&[0x22; 20]),
        Algo::Secp256k1,
        vec![],
    )]);
    let factory = Arc::new(MockClientFactory::new(client));
    let context = Arc::new(WalletContext::new());
    let wallet = XionWallet::new(Arc::clone(&context), factory.clone());

    wallet.enable(&"xion-mainnet-1".into()).await.unwrap();
    wallet.on_after_login_successful().await.unwrap();
    assert_eq!(context.session().accounts().len(), 1);

    context.session().reset();
    assert!(wallet.get_offline_signer_direct("xion-mainnet-1").is_err());

    // Enabling again after a disconnect builds a new client.
    wallet.enable(&"xion-mainnet-1".into()).await.unwrap();
    assert_eq!(factory.created(), 2);
}

#[test]
fn test_suggest_chain_rejected_without_runtime_setup() {
    let wallet = XionWallet::new(
        Arc::new(WalletContext::new()),
        Arc::new(MockClientFactory::default()),
    );
    let info = ChainInfo::from_json(
        r#"{"chainId":"xion-mainnet-1","chainName":"Xion","rpc":"r","rest":"l"}"#,
    )
    .unwrap();

    let err = tokio_test::block_on(wallet.experimental_suggest_chain(&info)).unwrap_err();
    assert!(matches!(
        err,
        Error::Wallet(WalletError::Unsupported {
            wallet: WalletType::Xion,
            operation: "experimentalSuggestChain",
        })
    ));
}
