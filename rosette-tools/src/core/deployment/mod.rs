// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use typed_builder::TypedBuilder;

use crate::{
    config::{GasPrice, NetworkName},
    core::{
        artifact::{ArtifactError, Artifacts},
        chain::{Chain, ChainError, DeploymentTx},
    },
    utils::color::{Color, DebugColor},
};

pub use record::{DeploymentRecord, DeploymentStore, StoreError};

pub mod record;

/// Options for a single [`Deployments::deploy`] call.
#[derive(Debug, Clone, TypedBuilder)]
pub struct DeployOptions {
    /// Account sending the deployment transaction.
    pub from: Address,
    /// Report the outcome at info level instead of debug.
    #[builder(default)]
    pub log: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeployResult {
    pub record: DeploymentRecord,
    /// `false` when an existing deployment was reused without sending a transaction.
    pub newly_deployed: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Chain(#[from] ChainError),
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Deploys artifacts to the active network and keeps track of what is deployed where.
#[derive(Debug)]
pub struct Deployments {
    network: NetworkName,
    gas_price: GasPrice,
    chain: Chain,
    artifacts: Artifacts,
    store: DeploymentStore,
    deployed_this_session: Vec<String>,
}

impl Deployments {
    pub fn new(
        network: NetworkName,
        gas_price: GasPrice,
        chain: Chain,
        artifacts: Artifacts,
        store: DeploymentStore,
    ) -> Self {
        Self {
            network,
            gas_price,
            chain,
            artifacts,
            store,
            deployed_this_session: Vec::new(),
        }
    }

    pub fn network(&self) -> NetworkName {
        self.network
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn get(&self, name: &str) -> Option<&DeploymentRecord> {
        self.store.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &DeploymentRecord> {
        self.store.records()
    }

    /// Records that sent a transaction during this session, in deployment order.
    pub fn newly_deployed(&self) -> impl Iterator<Item = &DeploymentRecord> {
        self.deployed_this_session
            .iter()
            .filter_map(|name| self.store.get(name))
    }

    /// Deploys the artifact `name` from `options.from`.
    ///
    /// An existing record is reused when its bytecode hash matches the current artifact and code
    /// is still present at its address; no transaction is sent in that case.
    pub async fn deploy(
        &mut self,
        name: &str,
        options: DeployOptions,
    ) -> Result<DeployResult, DeploymentError> {
        let artifact = self.artifacts.load(name)?;
        let bytecode_hash = artifact.bytecode_hash();

        if let Some(existing) = self.store.get(name) {
            if existing.bytecode_hash == bytecode_hash
                && self.chain.has_code(existing.address).await?
            {
                let record = existing.clone();
                report(
                    options.log,
                    format!(
                        "reusing {} at {}",
                        name.debug_mint(),
                        record.address.lavender()
                    ),
                );
                return Ok(DeployResult {
                    record,
                    newly_deployed: false,
                });
            }
            debug!(@grey, "{name} changed since its last deployment, redeploying");
        }

        let tx = DeploymentTx {
            from: options.from,
            init_code: artifact.bytecode,
            gas_price: self.gas_price,
        };
        let receipt = self.chain.deploy(tx).await?;
        let record = DeploymentRecord {
            name: name.to_string(),
            address: receipt.address,
            from: options.from,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            bytecode_hash,
            abi: artifact.abi,
        };
        report(
            options.log,
            format!(
                "deploying {} (tx: {})...: deployed at {} with {} gas",
                name.debug_mint(),
                record.transaction_hash.debug_lavender(),
                record.address.lavender(),
                record.gas_used.to_string().lavender(),
            ),
        );

        self.store.save(record.clone())?;
        if !self.deployed_this_session.iter().any(|deployed| deployed == name) {
            self.deployed_this_session.push(name.to_string());
        }
        Ok(DeployResult {
            record,
            newly_deployed: true,
        })
    }
}

fn report(log: bool, msg: String) {
    if log {
        info!(@grey, "{}", msg);
    } else {
        debug!(@grey, "{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::{
        config::{env::DEFAULT_MNEMONIC, AccountSource, SimulatedNetwork, SolidityConfig},
        core::{
            artifact::testing::{write_artifact, STOP_INIT_CODE},
            chain::SimulatedChain,
        },
    };

    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn deployments(artifacts_dir: &std::path::Path) -> Deployments {
        let network = SimulatedNetwork {
            chain_id: 31337,
            initial_base_fee_per_gas: 0,
            accounts: AccountSource::mnemonic(DEFAULT_MNEMONIC),
        };
        Deployments::new(
            NetworkName::Hardhat,
            GasPrice::Auto,
            Chain::Simulated(SimulatedChain::new(&network, &[DEPLOYER])),
            Artifacts::new(artifacts_dir, "src", SolidityConfig::default()),
            DeploymentStore::in_memory(),
        )
    }

    fn transactions(deployments: &Deployments) -> usize {
        deployments.chain().as_simulated().unwrap().transactions().len()
    }

    #[tokio::test]
    async fn deploys_once_and_reuses() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "RosetteStone", STOP_INIT_CODE);
        let mut deployments = deployments(dir.path());
        let options = DeployOptions::builder().from(DEPLOYER).log(true).build();

        let first = deployments.deploy("RosetteStone", options.clone()).await.unwrap();
        assert!(first.newly_deployed);
        assert_eq!(first.record.name, "RosetteStone");
        assert_eq!(first.record.from, DEPLOYER);
        assert_eq!(
            first.record.address,
            address!("0x5FbDB2315678afecb367f032d93F642f64180aa3")
        );

        let second = deployments.deploy("RosetteStone", options).await.unwrap();
        assert!(!second.newly_deployed);
        assert_eq!(second.record, first.record);
        assert_eq!(transactions(&deployments), 1);
        assert_eq!(deployments.newly_deployed().count(), 1);
    }

    #[tokio::test]
    async fn changed_bytecode_is_redeployed() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "RosetteStone", STOP_INIT_CODE);
        let mut deployments = deployments(dir.path());
        let options = DeployOptions::builder().from(DEPLOYER).build();

        let first = deployments.deploy("RosetteStone", options.clone()).await.unwrap();
        write_artifact(dir.path(), "RosetteStone", "0x6001600c60003960016000f3fe");
        let second = deployments.deploy("RosetteStone", options).await.unwrap();

        assert!(second.newly_deployed);
        assert_ne!(first.record.address, second.record.address);
        assert_ne!(first.record.bytecode_hash, second.record.bytecode_hash);
        assert_eq!(transactions(&deployments), 2);
        assert_eq!(deployments.get("RosetteStone"), Some(&second.record));
        assert_eq!(deployments.newly_deployed().count(), 1);
    }

    #[tokio::test]
    async fn missing_artifact_sends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut deployments = deployments(dir.path());
        let options = DeployOptions::builder().from(DEPLOYER).build();
        let result = deployments.deploy("RosetteStone", options).await;
        assert!(matches!(
            result,
            Err(DeploymentError::Artifact(ArtifactError::NotFound(_)))
        ));
        assert_eq!(transactions(&deployments), 0);
    }

    #[tokio::test]
    async fn chain_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "RosetteStone", STOP_INIT_CODE);
        let mut deployments = deployments(dir.path());
        let options = DeployOptions::builder().from(Address::ZERO).build();
        let result = deployments.deploy("RosetteStone", options).await;
        assert!(matches!(
            result,
            Err(DeploymentError::Chain(ChainError::UnknownSender(_)))
        ));
        assert!(deployments.get("RosetteStone").is_none());
    }
}
