//! Xion adapter configuration.

use serde::{Deserialize, Serialize};

use crate::wallet::WalletError;

/// Configuration for the Xion wallet adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XionConfig {
    /// RPC endpoint the auth client is configured with.
    pub endpoint: String,
}

impl XionConfig {
    /// Default Xion RPC endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = "https://rpc.xion.io";

    /// Environment variable read by [`from_env`](Self::from_env).
    pub const ENDPOINT_ENV: &'static str = "XION_RPC_URL";

    /// Creates a configuration pointing at the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads `XION_RPC_URL`, falling back to the default endpoint when unset.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Config`] if the variable is set but blank.
    pub fn from_env() -> Result<Self, WalletError> {
        Self::from_endpoint_var(std::env::var(Self::ENDPOINT_ENV).ok())
    }

    fn from_endpoint_var(value: Option<String>) -> Result<Self, WalletError> {
        match value {
            Some(url) if url.trim().is_empty() => Err(WalletError::config(format!(
                "{} is set but empty",
                Self::ENDPOINT_ENV
            ))),
            Some(url) => Ok(Self::new().with_endpoint(url)),
            None => Ok(Self::new()),
        }
    }

    /// Sets the RPC endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }
}

impl Default for XionConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_owned(),
        }
    }
}
