// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Solidity compiler settings.
//!
//! These values are never interpreted here; they describe how the artifacts were expected to be
//! built and are compared against the build info Hardhat leaves next to each artifact.

use serde::{Deserialize, Serialize};

pub const SOLC_VERSION: &str = "0.8.13";
pub const OPTIMIZER_RUNS: u32 = 10000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityConfig {
    pub compilers: Vec<CompilerSettings>,
}

impl SolidityConfig {
    /// Finds the compiler entry matching a build's version and optimizer settings.
    pub fn find(&self, version: &str, optimizer: &OptimizerSettings) -> Option<&CompilerSettings> {
        self.compilers
            .iter()
            .find(|c| c.version == version && &c.settings.optimizer == optimizer)
    }
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            compilers: vec![CompilerSettings {
                version: SOLC_VERSION.to_string(),
                settings: CompilerOptions {
                    optimizer: OptimizerSettings {
                        enabled: true,
                        runs: OPTIMIZER_RUNS,
                    },
                },
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    pub version: String,
    pub settings: CompilerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerOptions {
    pub optimizer: OptimizerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    #[serde(default = "default_runs")]
    pub runs: u32,
}

// solc's own default when `runs` is omitted
fn default_runs() -> u32 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_compiler_is_optimized() {
        let solidity = SolidityConfig::default();
        assert_eq!(solidity.compilers.len(), 1);
        let compiler = &solidity.compilers[0];
        assert_eq!(compiler.version, "0.8.13");
        assert!(compiler.settings.optimizer.enabled);
        assert_eq!(compiler.settings.optimizer.runs, 10000);
    }

    #[test]
    fn find_requires_matching_optimizer() {
        let solidity = SolidityConfig::default();
        let optimized = OptimizerSettings {
            enabled: true,
            runs: 10000,
        };
        let unoptimized = OptimizerSettings {
            enabled: false,
            runs: 200,
        };
        assert!(solidity.find("0.8.13", &optimized).is_some());
        assert!(solidity.find("0.8.13", &unoptimized).is_none());
        assert!(solidity.find("0.8.17", &optimized).is_none());
    }
}
