// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::utils::color::Color;

/// Chain id Hardhat uses for its in-process network.
pub const SIMULATED_CHAIN_ID: u64 = 31337;

/// Number of accounts derived from a mnemonic unless configured otherwise.
pub const DEFAULT_ACCOUNT_COUNT: u32 = 20;

/// BIP-44 derivation path prefix for Ethereum accounts; the account index is appended.
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0/";

/// Fixed gas price for xDai, in wei (1 gwei).
pub const XDAI_GAS_PRICE_WEI: u128 = 1_000_000_000;

/// The networks this project deploys to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    /// In-process simulated network.
    Hardhat,
    /// A node running on this machine.
    Localhost,
    Goerli,
    Xdai,
}

impl NetworkName {
    pub const ALL: [NetworkName; 4] = [
        NetworkName::Hardhat,
        NetworkName::Localhost,
        NetworkName::Goerli,
        NetworkName::Xdai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkName::Hardhat => "hardhat",
            NetworkName::Localhost => "localhost",
            NetworkName::Goerli => "goerli",
            NetworkName::Xdai => "xdai",
        }
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkName::ALL
            .into_iter()
            .find(|network| network.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| NetworkError::Unknown(s.to_string()))
    }
}

/// Where the accounts of a network come from.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AccountSource {
    Mnemonic {
        #[serde(serialize_with = "redact")]
        phrase: String,
        path: String,
        initial_index: u32,
        count: u32,
    },
}

impl AccountSource {
    /// Mnemonic source with Hardhat's derivation defaults.
    pub fn mnemonic(phrase: impl Into<String>) -> Self {
        AccountSource::Mnemonic {
            phrase: phrase.into(),
            path: DEFAULT_DERIVATION_PATH.to_string(),
            initial_index: 0,
            count: DEFAULT_ACCOUNT_COUNT,
        }
    }

    pub fn phrase(&self) -> &str {
        match self {
            AccountSource::Mnemonic { phrase, .. } => phrase,
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            AccountSource::Mnemonic { count, .. } => *count,
        }
    }

    pub fn set_count(&mut self, new_count: u32) {
        match self {
            AccountSource::Mnemonic { count, .. } => *count = new_count,
        }
    }
}

// Keeps secrets out of logs and `Debug` output.
impl fmt::Debug for AccountSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountSource::Mnemonic {
                path,
                initial_index,
                count,
                ..
            } => f
                .debug_struct("Mnemonic")
                .field("phrase", &"<redacted>")
                .field("path", path)
                .field("initial_index", initial_index)
                .field("count", count)
                .finish(),
        }
    }
}

fn redact<S: serde::Serializer>(_: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("<redacted>")
}

/// Gas price policy for transactions sent to a live network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GasPrice {
    /// Let the node suggest EIP-1559 fees.
    #[default]
    Auto,
    /// Legacy gas price in wei.
    Fixed(u128),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedNetwork {
    pub chain_id: u64,
    pub initial_base_fee_per_gas: u128,
    pub accounts: AccountSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpNetwork {
    pub url: String,
    pub accounts: AccountSource,
    pub gas_price: GasPrice,
}

/// Descriptor of one deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum NetworkConfig {
    Simulated(SimulatedNetwork),
    Http(HttpNetwork),
}

impl NetworkConfig {
    pub fn accounts(&self) -> &AccountSource {
        match self {
            NetworkConfig::Simulated(network) => &network.accounts,
            NetworkConfig::Http(network) => &network.accounts,
        }
    }

    pub fn accounts_mut(&mut self) -> &mut AccountSource {
        match self {
            NetworkConfig::Simulated(network) => &mut network.accounts,
            NetworkConfig::Http(network) => &mut network.accounts,
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, NetworkConfig::Simulated(_))
    }

    /// Checks that the descriptor can be used to deploy.
    pub fn validate(&self, name: NetworkName) -> Result<(), NetworkError> {
        match self {
            NetworkConfig::Simulated(_) => Ok(()),
            NetworkConfig::Http(network) => check_endpoint(name, &network.url),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unknown network {}, expected one of: hardhat, localhost, goerli, xdai", .0.red())]
    Unknown(String),
    #[error(
        "no endpoint configured for network {}\nset {} or ETH_NODE_URI",
        .0.red(),
        format!("ETH_NODE_URI_{}", .0.as_str().to_uppercase()).yellow(),
    )]
    MissingEndpoint(NetworkName),
    #[error("invalid endpoint for network {network}: {}", .url.red())]
    InvalidEndpoint { network: NetworkName, url: String },
}

pub fn check_endpoint(network: NetworkName, endpoint: &str) -> Result<(), NetworkError> {
    if endpoint.is_empty() {
        return Err(NetworkError::MissingEndpoint(network));
    }
    const SCHEMES: [&str; 2] = ["http://", "https://"];
    if SCHEMES.iter().any(|scheme| endpoint.starts_with(scheme)) {
        Ok(())
    } else {
        Err(NetworkError::InvalidEndpoint {
            network,
            url: endpoint.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_network_names() {
        assert_eq!("goerli".parse::<NetworkName>().unwrap(), NetworkName::Goerli);
        assert_eq!("XDAI".parse::<NetworkName>().unwrap(), NetworkName::Xdai);
        assert!(matches!(
            "mainnet".parse::<NetworkName>(),
            Err(NetworkError::Unknown(_))
        ));
    }

    #[test]
    fn endpoint_must_be_present_and_well_formed() {
        assert!(matches!(
            check_endpoint(NetworkName::Goerli, ""),
            Err(NetworkError::MissingEndpoint(NetworkName::Goerli))
        ));
        assert!(matches!(
            check_endpoint(NetworkName::Goerli, "ftp://node"),
            Err(NetworkError::InvalidEndpoint { .. })
        ));
        assert!(check_endpoint(NetworkName::Goerli, "https://node").is_ok());
        assert!(check_endpoint(NetworkName::Localhost, "http://127.0.0.1:8545").is_ok());
    }

    #[test]
    fn websocket_endpoints_are_rejected() {
        for url in ["ws://127.0.0.1:8546", "wss://node.example"] {
            assert!(matches!(
                check_endpoint(NetworkName::Localhost, url),
                Err(NetworkError::InvalidEndpoint { .. })
            ));
        }
    }

    #[test]
    fn debug_output_hides_mnemonic() {
        let source = AccountSource::mnemonic("secret words here");
        let printed = format!("{source:?}");
        assert!(!printed.contains("secret"));
        let json = serde_json::to_string(&source).unwrap();
        assert!(!json.contains("secret"));
    }
}
