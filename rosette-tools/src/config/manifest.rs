// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Rosette.toml manifest definitions.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use super::ConfigError;

/// Filename of the optional project manifest.
pub const FILENAME: &str = "Rosette.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlManifest {
    pub default_network: Option<String>,
    pub paths: Option<TomlPaths>,
    #[serde(default)]
    pub networks: BTreeMap<String, TomlNetwork>,
    pub tenderly: Option<TomlTenderly>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlPaths {
    pub sources: Option<String>,
    pub artifacts: Option<String>,
    pub deployments: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlNetwork {
    pub url: Option<String>,
    pub gas_price: Option<u64>,
    pub initial_base_fee_per_gas: Option<u64>,
    pub account_count: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlTenderly {
    pub project: Option<String>,
}

/// Reads the manifest at `path`, returning `None` when the file does not exist.
pub fn load(path: impl AsRef<Path>) -> Result<Option<TomlManifest>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(Some(manifest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manifest_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path().join(FILENAME)).unwrap().is_none());
    }

    #[test]
    fn parses_overlay() {
        let manifest: TomlManifest = toml::from_str(
            r#"
            default_network = "localhost"

            [paths]
            artifacts = "build/artifacts"

            [networks.xdai]
            gas_price = 2000000000

            [tenderly]
            project = "staging"
            "#,
        )
        .unwrap();
        assert_eq!(manifest.default_network.as_deref(), Some("localhost"));
        assert_eq!(
            manifest.paths.unwrap().artifacts.as_deref(),
            Some("build/artifacts")
        );
        assert_eq!(manifest.networks["xdai"].gas_price, Some(2_000_000_000));
        assert_eq!(manifest.tenderly.unwrap().project.as_deref(), Some("staging"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<TomlManifest, _> = toml::from_str("defaultNetwork = \"goerli\"");
        assert!(result.is_err());
    }
}
