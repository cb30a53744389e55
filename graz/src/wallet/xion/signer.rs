//! [`OfflineDirectSigner`] over the auth client's abstract account.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::account_number;
use super::client::{ClientSignDoc, SharedAbstractAccount, SharedAuthClient};
use crate::error::Result;
use crate::wallet::{
    AccountData, DirectSignResponse, OfflineDirectSigner, SharedDirectSigner, SignDoc, WalletError,
    WalletType,
};

/// Direct-mode signer backed by a Xion auth client.
///
/// The abstract account is looked up again on every call, so a signer built
/// while logged in starts failing with
/// [`WalletError::AbstractAccountNotInitialized`] once the client drops it.
#[derive(Debug, Clone)]
pub struct XionOfflineSigner {
    client: SharedAuthClient,
}

impl XionOfflineSigner {
    /// Build a signer for `client`.
    ///
    /// # Errors
    ///
    /// - [`WalletError::ClientNotInitialized`] when `client` is `None`.
    /// - [`WalletError::AbstractAccountNotInitialized`] when the client has
    ///   no abstract account yet.
    pub fn new(client: Option<SharedAuthClient>) -> Result<Self> {
        let client = client.ok_or(WalletError::client_not_initialized(WalletType::Xion))?;
        client.abstract_account().ready()?;
        Ok(Self { client })
    }

    /// Same as [`new`](Self::new), type-erased for the wallet interface.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn shared(client: Option<SharedAuthClient>) -> Result<SharedDirectSigner> {
        Ok(Arc::new(Self::new(client)?))
    }

    fn account(&self) -> Result<SharedAbstractAccount> {
        Ok(self.client.abstract_account().ready()?)
    }
}

#[async_trait]
impl OfflineDirectSigner for XionOfflineSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>> {
        Ok(self.account()?.get_accounts().await?)
    }

    async fn sign_direct(
        &self,
        signer_address: &str,
        sign_doc: SignDoc,
    ) -> Result<DirectSignResponse> {
        let account = self.account()?;
        debug!(
            signer = signer_address,
            chain_id = %sign_doc.chain_id,
            account_number = sign_doc.account_number,
            "signing direct",
        );

        let response = account
            .sign_direct(
                signer_address,
                ClientSignDoc {
                    body_bytes: sign_doc.body_bytes,
                    auth_info_bytes: sign_doc.auth_info_bytes,
                    chain_id: sign_doc.chain_id,
                    account_number: account_number::to_client(sign_doc.account_number),
                },
            )
            .await?;

        let signed = response.signed;
        Ok(DirectSignResponse {
            signed: SignDoc {
                body_bytes: signed.body_bytes,
                auth_info_bytes: signed.auth_info_bytes,
                chain_id: signed.chain_id,
                account_number: account_number::from_client(signed.account_number)?,
            },
            signature: response.signature,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alloy::primitives::U256;

    use super::*;
    use crate::Error;
    use crate::wallet::Algo;
    use crate::wallet::xion::MockAuthClient;

    fn doc(account_number: u64) -> SignDoc {
        SignDoc {
            body_bytes: vec![1, 2, 3],
            auth_info_bytes: vec![4, 5],
            chain_id: "xion-mainnet-1".into(),
            account_number,
        }
    }

    #[test]
    fn missing_client_fails() {
        let err = XionOfflineSigner::new(None).unwrap_err();
        assert_eq!(
            err.as_wallet(),
            Some(&WalletError::client_not_initialized(WalletType::Xion))
        );
    }

    #[test]
    fn missing_abstract_account_fails() {
        let client: SharedAuthClient = Arc::new(MockAuthClient::new().without_abstract_account());
        let err = XionOfflineSigner::new(Some(client)).unwrap_err();
        assert_eq!(
            err.as_wallet(),
            Some(&WalletError::AbstractAccountNotInitialized)
        );
    }

    #[tokio::test]
    async fn get_accounts_delegates() {
        let accounts = vec![AccountData::new("xion1abc", Algo::Secp256k1, vec![3; 33])];
        let client: SharedAuthClient = Arc::new(MockAuthClient::new().with_accounts(accounts.clone()));
        let signer = XionOfflineSigner::new(Some(client)).unwrap();
        assert_eq!(signer.get_accounts().await.unwrap(), accounts);
    }

    #[tokio::test]
    async fn sign_direct_converts_account_number() {
        let mock = Arc::new(MockAuthClient::new());
        let client: SharedAuthClient = mock.clone();
        let signer = XionOfflineSigner::new(Some(client)).unwrap();

        let response = signer.sign_direct("xion1abc", doc(77)).await.unwrap();

        let (address, sent) = mock.last_sign_request().unwrap();
        assert_eq!(address, "xion1abc");
        assert_eq!(sent.account_number, U256::from(77u64));
        assert_eq!(sent.body_bytes, vec![1, 2, 3]);
        assert_eq!(response.signed, doc(77));
        assert_eq!(response.signature, MockAuthClient::signature());
    }

    #[tokio::test]
    async fn sign_direct_rejects_oversized_signed_account_number() {
        let mock = Arc::new(MockAuthClient::new().with_signed_account_number(U256::MAX));
        let client: SharedAuthClient = mock.clone();
        let signer = XionOfflineSigner::new(Some(client)).unwrap();

        let err = signer.sign_direct("xion1abc", doc(1)).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Wallet(WalletError::AccountNumberOverflow(_))
        ));
    }

    #[tokio::test]
    async fn signer_fails_after_client_drops_account() {
        let mock = Arc::new(MockAuthClient::new());
        let client: SharedAuthClient = mock.clone();
        let signer = XionOfflineSigner::new(Some(client)).unwrap();

        mock.set_abstract_account_configured(false);
        let err = signer.get_accounts().await.unwrap_err();
        assert_eq!(
            err.as_wallet(),
            Some(&WalletError::AbstractAccountNotInitialized)
        );
    }
}
