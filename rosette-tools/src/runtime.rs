// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Runtime context handed to deployment tasks.

use std::collections::BTreeMap;

use alloy::{primitives::Address, signers::local::PrivateKeySigner};

use crate::{
    config::{Config, ConfigError, GasPrice, NetworkConfig, NetworkError, NetworkName},
    core::{
        accounts::{derive_signers, AccountError, NamedAccounts},
        artifact::Artifacts,
        chain::{Chain, ChainError, RpcChain, SimulatedChain},
        deployment::{DeploymentStore, Deployments, StoreError},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Account(#[from] AccountError),
    #[error("{0}")]
    Chain(#[from] ChainError),
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// The active network, its accounts, and the deployment facility.
#[derive(Debug)]
pub struct Runtime {
    network: NetworkName,
    named_accounts: NamedAccounts,
    accounts: Vec<Address>,
    deployments: Deployments,
}

impl Runtime {
    /// Connects to `network` as described by `config`.
    pub async fn connect(config: &Config, network: NetworkName) -> Result<Self, RuntimeError> {
        let descriptor = config.network(network)?;
        descriptor.validate(network)?;

        let signers = derive_signers(descriptor.accounts())?;
        let accounts: Vec<Address> = signers.iter().map(PrivateKeySigner::address).collect();
        debug!(@grey, "derived {} account(s) for {}", accounts.len(), network);

        let artifacts = Artifacts::new(
            config.artifacts_dir(),
            &config.paths.sources,
            config.solidity.clone(),
        );

        let (chain, store, gas_price) = match descriptor {
            NetworkConfig::Simulated(simulated) => (
                Chain::Simulated(SimulatedChain::new(simulated, &accounts)),
                DeploymentStore::in_memory(),
                GasPrice::Auto,
            ),
            NetworkConfig::Http(http) => {
                if accounts.is_empty() {
                    return Err(AccountError::NoAccounts.into());
                }
                let chain = RpcChain::connect(&http.url, signers).await?;
                let store = DeploymentStore::open(config.deployments_dir(network), chain.chain_id())?;
                (Chain::Rpc(chain), store, http.gas_price)
            }
        };
        info!(@grey, "using network {} (chain id {})", network.as_str().mint(), chain.chain_id());

        Ok(Self {
            network,
            named_accounts: config.named_accounts.clone(),
            accounts,
            deployments: Deployments::new(network, gas_price, chain, artifacts, store),
        })
    }

    pub fn network(&self) -> NetworkName {
        self.network
    }

    /// Accounts of the active network, in derivation order.
    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }

    /// Resolves every named account role to an address on the active network.
    pub fn named_accounts(&self) -> Result<BTreeMap<String, Address>, AccountError> {
        self.named_accounts.resolve_all(&self.accounts)
    }

    pub fn named_account(&self, role: &str) -> Result<Address, AccountError> {
        self.named_accounts.resolve(role, &self.accounts)
    }

    pub fn deployments(&mut self) -> &mut Deployments {
        &mut self.deployments
    }

    pub fn chain_id(&self) -> u64 {
        self.deployments.chain().chain_id()
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::config::Env;

    #[tokio::test]
    async fn simulated_runtime_resolves_deployer() {
        let config = Config::resolve(".", &Env::default(), None).unwrap();
        let runtime = Runtime::connect(&config, NetworkName::Hardhat).await.unwrap();
        assert_eq!(runtime.chain_id(), 31337);
        assert_eq!(runtime.accounts().len(), 20);
        assert_eq!(
            runtime.named_account("deployer").unwrap(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        assert_eq!(
            runtime.named_accounts().unwrap()["deployer"],
            runtime.accounts()[0]
        );
    }

    #[tokio::test]
    async fn live_network_needs_an_endpoint() {
        let config = Config::resolve(".", &Env::default(), None).unwrap();
        let result = Runtime::connect(&config, NetworkName::Goerli).await;
        assert!(matches!(
            result,
            Err(RuntimeError::Network(NetworkError::MissingEndpoint(
                NetworkName::Goerli
            )))
        ));
    }

    #[tokio::test]
    async fn no_accounts_fails_resolution() {
        let manifest = toml::from_str(
            r#"
            [networks.hardhat]
            account_count = 0
            "#,
        )
        .unwrap();
        let config = Config::resolve(".", &Env::default(), Some(manifest)).unwrap();
        let runtime = Runtime::connect(&config, NetworkName::Hardhat).await.unwrap();
        assert!(matches!(
            runtime.named_account("deployer"),
            Err(AccountError::NoAccounts)
        ));
    }

    #[tokio::test]
    async fn live_network_without_accounts_fails_before_connecting() {
        let manifest = toml::from_str(
            r#"
            [networks.localhost]
            account_count = 0
            "#,
        )
        .unwrap();
        let config = Config::resolve(".", &Env::default(), Some(manifest)).unwrap();
        let result = Runtime::connect(&config, NetworkName::Localhost).await;
        assert!(matches!(
            result,
            Err(RuntimeError::Account(AccountError::NoAccounts))
        ));
    }

    #[tokio::test]
    async fn websocket_endpoint_is_rejected_before_connecting() {
        let env: Env = [("ETH_NODE_URI_LOCALHOST", "ws://127.0.0.1:8546")]
            .into_iter()
            .collect();
        let config = Config::resolve(".", &env, None).unwrap();
        let result = Runtime::connect(&config, NetworkName::Localhost).await;
        assert!(matches!(
            result,
            Err(RuntimeError::Network(NetworkError::InvalidEndpoint { .. }))
        ));
    }
}
