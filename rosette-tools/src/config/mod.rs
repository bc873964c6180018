// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Project configuration.
//!
//! A [`Config`] is built once at startup from an [`Env`] snapshot and the optional
//! [`Rosette.toml`](manifest::FILENAME) overlay, then passed by reference to whatever needs it.
//! Environment values take priority over the overlay, and the overlay over the built-in defaults.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::core::accounts::NamedAccounts;

pub use compiler::{CompilerSettings, OptimizerSettings, SolidityConfig};
pub use env::Env;
pub use network::{
    AccountSource, GasPrice, HttpNetwork, NetworkConfig, NetworkError, NetworkName,
    SimulatedNetwork,
};

pub mod compiler;
pub mod env;
pub mod manifest;
pub mod network;

/// Monitoring project deployments are pushed to.
pub const TENDERLY_PROJECT: &str = "rosette-contracts";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),
    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("invalid uri or network not supported by node provider: {uri}")]
    UnsupportedNodeUri { uri: String },
    #[error("network {0} is not configured")]
    MissingNetwork(NetworkName),
    #[error("network {network} does not accept {field}")]
    UnsupportedOverride {
        network: NetworkName,
        field: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory every relative path is resolved against.
    pub root: PathBuf,
    pub default_network: NetworkName,
    pub solidity: SolidityConfig,
    pub named_accounts: NamedAccounts,
    pub networks: BTreeMap<NetworkName, NetworkConfig>,
    pub paths: PathsConfig,
    pub tenderly: TenderlyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathsConfig {
    pub sources: PathBuf,
    pub artifacts: PathBuf,
    pub deployments: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: "src".into(),
            artifacts: "artifacts".into(),
            deployments: "deployments".into(),
        }
    }
}

#[derive(Clone, Serialize)]
pub struct TenderlyConfig {
    pub project: String,
    pub username: Option<String>,
    #[serde(skip)]
    pub access_key: Option<String>,
}

impl std::fmt::Debug for TenderlyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenderlyConfig")
            .field("project", &self.project)
            .field("username", &self.username)
            .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Loads the configuration for the project rooted at `root`.
    ///
    /// Reads `root/.env` and `root/Rosette.toml` when present.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let root = root.as_ref();
        let env = Env::capture(root);
        let manifest = manifest::load(root.join(manifest::FILENAME))?;
        Self::resolve(root, &env, manifest)
    }

    /// Builds the configuration from explicit inputs.
    pub fn resolve(
        root: impl Into<PathBuf>,
        env: &Env,
        manifest: Option<manifest::TomlManifest>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::defaults(root, env)?;
        if let Some(manifest) = manifest {
            config.apply(manifest, env)?;
        }
        Ok(config)
    }

    fn defaults(root: impl Into<PathBuf>, env: &Env) -> Result<Self, ConfigError> {
        let mut networks = BTreeMap::new();
        networks.insert(
            NetworkName::Hardhat,
            NetworkConfig::Simulated(SimulatedNetwork {
                chain_id: network::SIMULATED_CHAIN_ID,
                // always 0, coverage instrumentation cannot price transactions otherwise
                initial_base_fee_per_gas: 0,
                accounts: AccountSource::mnemonic(env::DEFAULT_MNEMONIC),
            }),
        );
        networks.insert(
            NetworkName::Localhost,
            NetworkConfig::Http(HttpNetwork {
                url: env.node_url(NetworkName::Localhost.as_str())?,
                accounts: AccountSource::mnemonic(env.mnemonic(None)),
                gas_price: GasPrice::Auto,
            }),
        );
        for name in [NetworkName::Goerli, NetworkName::Xdai] {
            let gas_price = match name {
                NetworkName::Xdai => GasPrice::Fixed(network::XDAI_GAS_PRICE_WEI),
                _ => GasPrice::Auto,
            };
            networks.insert(
                name,
                NetworkConfig::Http(HttpNetwork {
                    url: env.node_url(name.as_str())?,
                    accounts: AccountSource::mnemonic(env.mnemonic(Some(name.as_str()))),
                    gas_price,
                }),
            );
        }

        Ok(Self {
            root: root.into(),
            default_network: NetworkName::Hardhat,
            solidity: SolidityConfig::default(),
            named_accounts: NamedAccounts::default(),
            networks,
            paths: PathsConfig::default(),
            tenderly: TenderlyConfig {
                project: TENDERLY_PROJECT.to_string(),
                username: env.get(env::TENDERLY_USERNAME).map(str::to_string),
                access_key: env.get(env::TENDERLY_ACCESS_KEY).map(str::to_string),
            },
        })
    }

    fn apply(&mut self, manifest: manifest::TomlManifest, env: &Env) -> Result<(), ConfigError> {
        if let Some(name) = manifest.default_network {
            self.default_network = name.parse()?;
        }
        if let Some(paths) = manifest.paths {
            if let Some(sources) = paths.sources {
                self.paths.sources = sources.into();
            }
            if let Some(artifacts) = paths.artifacts {
                self.paths.artifacts = artifacts.into();
            }
            if let Some(deployments) = paths.deployments {
                self.paths.deployments = deployments.into();
            }
        }
        if let Some(project) = manifest.tenderly.and_then(|t| t.project) {
            self.tenderly.project = project;
        }

        for (name, overlay) in manifest.networks {
            let name: NetworkName = name.parse()?;
            let network = self
                .networks
                .get_mut(&name)
                .ok_or(ConfigError::MissingNetwork(name))?;
            if let Some(count) = overlay.account_count {
                network.accounts_mut().set_count(count);
            }
            match network {
                NetworkConfig::Simulated(simulated) => {
                    if overlay.url.is_some() {
                        return Err(ConfigError::UnsupportedOverride {
                            network: name,
                            field: "url",
                        });
                    }
                    if overlay.gas_price.is_some() {
                        return Err(ConfigError::UnsupportedOverride {
                            network: name,
                            field: "gas_price",
                        });
                    }
                    if let Some(fee) = overlay.initial_base_fee_per_gas.filter(|fee| *fee != 0) {
                        warn!(@yellow, "ignoring initial_base_fee_per_gas = {fee} for {name}: the simulated network always starts at 0");
                    }
                    simulated.initial_base_fee_per_gas = 0;
                }
                NetworkConfig::Http(http) => {
                    if overlay.initial_base_fee_per_gas.is_some() {
                        return Err(ConfigError::UnsupportedOverride {
                            network: name,
                            field: "initial_base_fee_per_gas",
                        });
                    }
                    let scoped_var = format!("{}_{}", env::ETH_NODE_URI, name.as_str().to_uppercase());
                    match overlay.url {
                        Some(url) if env.get(&scoped_var).is_none() => http.url = url,
                        Some(_) => debug!(@grey, "{scoped_var} overrides the manifest url for {name}"),
                        None => {}
                    }
                    if let Some(wei) = overlay.gas_price {
                        http.gas_price = GasPrice::Fixed(wei.into());
                    }
                }
            }
        }
        Ok(())
    }

    pub fn network(&self, name: NetworkName) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(&name)
            .ok_or(ConfigError::MissingNetwork(name))
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.root.join(&self.paths.sources)
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.root.join(&self.paths.artifacts)
    }

    /// Directory holding the deployment records of one network.
    pub fn deployments_dir(&self, network: NetworkName) -> PathBuf {
        self.root.join(&self.paths.deployments).join(network.as_str())
    }
}
