// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Snapshot of the environment variables the configuration depends on.
//!
//! The process environment is read exactly once, in [`Env::capture`], and the resulting snapshot
//! is passed explicitly to everything that resolves endpoints or credentials.

use std::{collections::HashMap, path::Path};

use super::ConfigError;

/// Mnemonic used when neither a network-scoped nor a global mnemonic is configured.
pub const DEFAULT_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Endpoint used for the `localhost` network when no override is set.
pub const LOCALHOST_URL: &str = "http://localhost:8545";

pub const ETH_NODE_URI: &str = "ETH_NODE_URI";
pub const MNEMONIC: &str = "MNEMONIC";
pub const TENDERLY_USERNAME: &str = "TENDERLY_USERNAME";
pub const TENDERLY_ACCESS_KEY: &str = "TENDERLY_ACCESS_KEY";

const NETWORK_NAME_PLACEHOLDER: &str = "{{networkName}}";

#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Loads `.env` from `dir` if present, then captures the process environment.
    pub fn capture(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(".env");
        match dotenvy::from_path(&path) {
            Ok(()) => debug!(@grey, "loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => warn!(@yellow, "ignoring unreadable .env file: {err}"),
        }
        std::env::vars().collect()
    }

    /// Returns the value of `key`, treating empty values as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resolves the RPC endpoint for a network.
    ///
    /// `ETH_NODE_URI_<NAME>` wins; `localhost` falls back to [`LOCALHOST_URL`]; any other network
    /// uses `ETH_NODE_URI` with `{{networkName}}` substituted, or the empty string when unset.
    pub fn node_url(&self, network: &str) -> Result<String, ConfigError> {
        if let Some(uri) = self.get(&scoped(ETH_NODE_URI, network)) {
            return Ok(uri.to_string());
        }
        if network == "localhost" {
            return Ok(LOCALHOST_URL.to_string());
        }
        let Some(template) = self.get(ETH_NODE_URI) else {
            return Ok(String::new());
        };
        let uri = template.replacen(NETWORK_NAME_PLACEHOLDER, network, 1);
        if uri.contains("{{") {
            return Err(ConfigError::UnsupportedNodeUri { uri });
        }
        Ok(uri)
    }

    /// Resolves the mnemonic for a network, or the global one when `network` is `None`.
    pub fn mnemonic(&self, network: Option<&str>) -> String {
        network
            .and_then(|name| self.get(&scoped(MNEMONIC, name)))
            .or_else(|| self.get(MNEMONIC))
            .unwrap_or(DEFAULT_MNEMONIC)
            .to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn scoped(prefix: &str, network: &str) -> String {
    format!("{prefix}_{}", network.to_uppercase())
}
