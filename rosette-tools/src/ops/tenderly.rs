// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    config::{Config, NetworkName},
    core::monitoring::TenderlyClient,
    runtime::Runtime,
    Error, Result,
};

/// Pushes the stored deployments `names` on `network` to the Tenderly project.
pub async fn tenderly_push(config: &Config, network: NetworkName, names: &[String]) -> Result<()> {
    let client = TenderlyClient::from_config(&config.tenderly)?;
    let mut runtime = Runtime::connect(config, network).await?;
    let chain_id = runtime.chain_id();
    for name in names {
        let record = runtime
            .deployments()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotDeployed {
                name: name.clone(),
                network: network.to_string(),
            })?;
        client.push(chain_id, &record).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Env, core::monitoring::MonitoringError};

    #[tokio::test]
    async fn needs_credentials() {
        let config = Config::resolve(".", &Env::default(), None).unwrap();
        let result = tenderly_push(&config, NetworkName::Hardhat, &["RosetteStone".into()]).await;
        assert!(matches!(
            result,
            Err(Error::Monitoring(MonitoringError::MissingUsername))
        ));
    }

    #[tokio::test]
    async fn unknown_deployment_is_reported() {
        let env: Env = [("TENDERLY_USERNAME", "rosette"), ("TENDERLY_ACCESS_KEY", "key")]
            .into_iter()
            .collect();
        let config = Config::resolve(".", &env, None).unwrap();
        let result = tenderly_push(&config, NetworkName::Hardhat, &["RosetteStone".into()]).await;
        assert!(matches!(result, Err(Error::NotDeployed { .. })));
    }
}
