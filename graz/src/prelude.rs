//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use graz::prelude::*;
//! ```

pub use crate::config::XionConfig;
pub use crate::constant::{RECONNECT_SESSION_ACTIVE, RECONNECT_SESSION_KEY};
pub use crate::error::{Error, Result};
pub use crate::store::{
    ConnectionStatus, InMemorySessionStorage, InternalState, InternalStore, SessionStorage,
    SessionStore, SharedSessionStorage, WalletContext,
};
pub use crate::wallet::xion::{
    AbstractAccount, AbstractAccountState, AbstraxionAuth, AuthClientFactory, FnFactory,
    MockAuthClient, MockClientFactory, SharedAuthClient, XionOfflineSigner, XionWallet,
};
pub use crate::wallet::{
    AccountData, Algo, ChainIds, ChainInfo, DirectSignResponse, Key, OfflineDirectSigner,
    PartialSignDoc, PubKey, SharedDirectSigner, SharedWallet, SignDoc, StdSignature, Wallet,
    WalletError, WalletType,
};
