// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use crate::{
    config::{Config, NetworkName},
    core::{deployment::DeploymentRecord, monitoring::TenderlyClient},
    runtime::Runtime,
    tasks::{self, Tag},
    Result,
};

/// Runs the deployment tasks selected by `tags` against `network`.
///
/// With `report`, contracts deployed by this run are pushed to the configured Tenderly project
/// afterwards. The simulated network has nothing to report.
pub async fn deploy(
    config: &Config,
    network: NetworkName,
    tags: &[Tag],
    report: bool,
) -> Result<Vec<DeploymentRecord>> {
    let mut runtime = Runtime::connect(config, network).await?;
    tasks::run(&mut runtime, tags).await?;

    let chain_id = runtime.chain_id();
    let deployments = runtime.deployments();
    let records: Vec<DeploymentRecord> = deployments.all().cloned().collect();
    let fresh: Vec<DeploymentRecord> = deployments.newly_deployed().cloned().collect();

    greyln!("deployments on {}:", network.as_str().mint());
    for record in &records {
        greyln!("  {}: {}", record.name.mint(), record.address.lavender());
    }

    if report {
        if config.network(network)?.is_simulated() {
            warn!(@yellow, "skipping tenderly report for simulated network {network}");
        } else if !fresh.is_empty() {
            let client = TenderlyClient::from_config(&config.tenderly)?;
            for record in &fresh {
                client.push(chain_id, record).await?;
            }
        }
    }
    Ok(records)
}
