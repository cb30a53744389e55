//! Xion wallet backed by the Abstraxion account-abstraction auth client.
//!
//! See [`XionWallet`] for construction and usage.

pub mod account_number;
mod client;
mod mock;
mod signer;
mod wallet;

pub use client::{
    AbstractAccount, AbstractAccountState, AbstraxionAuth, AuthClientFactory, ClientSignDoc,
    ClientSignResponse, FnFactory, SharedAbstractAccount, SharedAuthClient,
};
pub use mock::{MockAuthClient, MockClientFactory};
pub use signer::XionOfflineSigner;
pub use wallet::XionWallet;
