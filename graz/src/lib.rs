//! Graz - wallet adapters for a multi-wallet Cosmos connection manager.
//!
//! Every wallet the manager can connect to implements the same
//! [`Wallet`](wallet::Wallet) capability set. This crate ships the adapter for
//! the Xion account-abstraction wallet ([`XionWallet`](wallet::xion::XionWallet)),
//! along with the session and internal stores the adapters write into.

pub mod config;
pub mod constant;
pub mod error;
pub mod prelude;
pub mod store;
pub mod wallet;

pub use error::{Error, Result};
pub use wallet::WalletError;
