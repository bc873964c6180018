// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    config::{Config, NetworkConfig, NetworkName},
    utils::{color::Color, format_gas_price, format_gwei},
    Result,
};

/// Prints the resolved configuration, or one network of it.
///
/// Mnemonics and access keys are never printed.
pub fn print_config(config: &Config, network: Option<NetworkName>, json: bool) -> Result<()> {
    if json {
        let value = match network {
            Some(name) => serde_json::to_value(config.network(name)?)?,
            None => serde_json::to_value(config)?,
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if network.is_none() {
        greyln!("root: {}", config.root.display().mint());
        greyln!("default network: {}", config.default_network.as_str().mint());
        for compiler in &config.solidity.compilers {
            let optimizer = &compiler.settings.optimizer;
            greyln!(
                "solidity {} (optimizer: {}, runs: {})",
                compiler.version.mint(),
                optimizer.enabled.mint(),
                optimizer.runs.mint()
            );
        }
        for (role, index) in config.named_accounts.roles() {
            greyln!("named account {}: {}", role.mint(), index.mint());
        }
        greyln!("tenderly project: {}", config.tenderly.project.mint());
    }

    let names: Vec<NetworkName> = match network {
        Some(name) => vec![name],
        None => config.networks.keys().copied().collect(),
    };
    for name in names {
        print_network(name, config.network(name)?);
    }
    Ok(())
}

fn print_network(name: NetworkName, network: &NetworkConfig) {
    match network {
        NetworkConfig::Simulated(simulated) => {
            greyln!("network {} (simulated)", name.as_str().mint());
            greyln!("  chain id: {}", simulated.chain_id.mint());
            greyln!(
                "  initial base fee: {}",
                format_gwei(simulated.initial_base_fee_per_gas).mint()
            );
        }
        NetworkConfig::Http(http) => {
            greyln!("network {}", name.as_str().mint());
            let url = if http.url.is_empty() {
                "<unset>".yellow()
            } else {
                http.url.mint()
            };
            greyln!("  url: {url}");
            greyln!("  gas price: {}", format_gas_price(http.gas_price));
        }
    }
    greyln!("  accounts: {}", network.accounts().count().mint());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Env;

    #[test]
    fn prints_every_network() {
        let config = Config::resolve(".", &Env::default(), None).unwrap();
        print_config(&config, None, false).unwrap();
        print_config(&config, Some(NetworkName::Xdai), true).unwrap();
    }

    #[test]
    fn json_output_redacts_mnemonic() {
        let env: Env = [("MNEMONIC", "alpha beta gamma")].into_iter().collect();
        let config = Config::resolve(".", &env, None).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("alpha beta gamma"));
    }
}
