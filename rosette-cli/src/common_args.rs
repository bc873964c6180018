// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use rosette_tools::{config::ConfigError, Config, NetworkName};

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Project directory holding `artifacts/`, `deployments/` and an optional `Rosette.toml`
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
}

impl ProjectArgs {
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::load(&self.root)
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to use (defaults to the configured default network)
    #[arg(short, long)]
    pub network: Option<NetworkName>,
}

impl NetworkArgs {
    pub fn resolve(&self, config: &Config) -> NetworkName {
        self.network.unwrap_or(config.default_network)
    }
}
