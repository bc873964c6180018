// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts, in the Hardhat artifact format.
//!
//! Artifacts live at `<artifacts>/<sources>/<File>.sol/<Name>.json`. Hardhat writes a
//! `<Name>.dbg.json` next to each one pointing at the build info of the compilation that produced
//! it; when present, that build info is checked against the configured compilers.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{keccak256, Bytes, B256};
use serde::Deserialize;

use crate::{
    config::{OptimizerSettings, SolidityConfig},
    utils::color::Color,
};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("glob error: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("no artifact found for contract {}", .0.red())]
    NotFound(String),
    #[error("multiple artifacts found for contract {name}: {paths:?}")]
    Ambiguous { name: String, paths: Vec<PathBuf> },
    #[error("artifact {path:?} describes contract {found}, expected {expected}")]
    NameMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
    #[error("contract {} has no bytecode (abstract contract or interface?)", .0.red())]
    NotDeployable(String),
    #[error("contract {name} was compiled from {source_name}, outside of {sources:?}")]
    OutsideSources {
        name: String,
        source_name: String,
        sources: PathBuf,
    },
    #[error(
        "contract {name} was compiled with solc {version} ({optimizer:?}), which matches no configured compiler"
    )]
    CompilerMismatch {
        name: String,
        version: String,
        optimizer: OptimizerSettings,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub source_name: String,
    #[serde(default)]
    pub abi: serde_json::Value,
    pub bytecode: Bytes,
    #[serde(default)]
    pub deployed_bytecode: Bytes,
}

impl Artifact {
    /// Hash of the creation bytecode, used to decide whether a deployment is still current.
    pub fn bytecode_hash(&self) -> B256 {
        keccak256(&self.bytecode)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DebugFile {
    build_info: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildInfo {
    solc_version: String,
    input: BuildInput,
}

#[derive(Debug, Deserialize)]
struct BuildInput {
    settings: BuildSettings,
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    optimizer: OptimizerSettings,
}

/// Locates and validates artifacts for one project.
#[derive(Debug, Clone)]
pub struct Artifacts {
    root: PathBuf,
    sources: PathBuf,
    solidity: SolidityConfig,
}

impl Artifacts {
    /// `root` is the artifacts directory; `sources` is the source path relative to the project,
    /// as it appears in each artifact's `sourceName`.
    pub fn new(root: impl Into<PathBuf>, sources: impl Into<PathBuf>, solidity: SolidityConfig) -> Self {
        Self {
            root: root.into(),
            sources: sources.into(),
            solidity,
        }
    }

    /// Finds the artifact file for `name`.
    pub fn find(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        let pattern = self.root.join("**").join(format!("{name}.json"));
        let mut paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
            .filter_map(Result::ok)
            .filter(|path| !path.starts_with(self.root.join("build-info")))
            .collect();
        match paths.len() {
            0 => Err(ArtifactError::NotFound(name.to_string())),
            1 => Ok(paths.remove(0)),
            _ => {
                paths.sort();
                Err(ArtifactError::Ambiguous {
                    name: name.to_string(),
                    paths,
                })
            }
        }
    }

    /// Loads and validates the artifact for `name`.
    pub fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.find(name)?;
        debug!(@grey, "reading artifact {}", path.display());
        let artifact: Artifact = serde_json::from_str(&fs::read_to_string(&path)?)?;

        if artifact.contract_name != name {
            return Err(ArtifactError::NameMismatch {
                path,
                expected: name.to_string(),
                found: artifact.contract_name,
            });
        }
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::NotDeployable(name.to_string()));
        }
        if !Path::new(&artifact.source_name).starts_with(&self.sources) {
            return Err(ArtifactError::OutsideSources {
                name: name.to_string(),
                source_name: artifact.source_name,
                sources: self.sources.clone(),
            });
        }
        self.check_build_info(&path, name)?;
        Ok(artifact)
    }

    fn check_build_info(&self, artifact_path: &Path, name: &str) -> Result<(), ArtifactError> {
        let dbg_path = artifact_path.with_extension("dbg.json");
        if !dbg_path.exists() {
            debug!(@grey, "no debug file for {name}, skipping compiler check");
            return Ok(());
        }
        let dbg: DebugFile = serde_json::from_str(&fs::read_to_string(&dbg_path)?)?;
        let build_info_path = dbg_path
            .parent()
            .map(|dir| dir.join(&dbg.build_info))
            .unwrap_or(dbg.build_info);
        let build_info: BuildInfo = serde_json::from_str(&fs::read_to_string(build_info_path)?)?;

        let optimizer = build_info.input.settings.optimizer;
        match self.solidity.find(&build_info.solc_version, &optimizer) {
            Some(_) => Ok(()),
            None => Err(ArtifactError::CompilerMismatch {
                name: name.to_string(),
                version: build_info.solc_version,
                optimizer,
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers writing Hardhat-shaped artifacts to disk.

    use std::{fs, path::Path};

    /// Creation code returning a one-byte runtime (`STOP`).
    pub const STOP_INIT_CODE: &str = "0x6001600c60003960016000f300";

    pub fn write_artifact(artifacts: &Path, name: &str, bytecode: &str) {
        let dir = artifacts.join("src").join(format!("{name}.sol"));
        fs::create_dir_all(&dir).unwrap();
        let artifact = serde_json::json!({
            "_format": "hh-sol-artifact-1",
            "contractName": name,
            "sourceName": format!("src/{name}.sol"),
            "abi": [],
            "bytecode": bytecode,
            "deployedBytecode": "0x00",
            "linkReferences": {},
            "deployedLinkReferences": {},
        });
        fs::write(dir.join(format!("{name}.json")), artifact.to_string()).unwrap();
    }

    pub fn write_build_info(artifacts: &Path, name: &str, version: &str, runs: u32) {
        let dir = artifacts.join("src").join(format!("{name}.sol"));
        let build_info_dir = artifacts.join("build-info");
        fs::create_dir_all(&build_info_dir).unwrap();
        let build_info = serde_json::json!({
            "solcVersion": version,
            "input": { "settings": { "optimizer": { "enabled": true, "runs": runs } } },
        });
        fs::write(build_info_dir.join("abc123.json"), build_info.to_string()).unwrap();
        let dbg = serde_json::json!({
            "_format": "hh-sol-dbg-1",
            "buildInfo": "../../build-info/abc123.json",
        });
        fs::write(dir.join(format!("{name}.dbg.json")), dbg.to_string()).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::{testing::*, *};

    fn artifacts(dir: &Path) -> Artifacts {
        Artifacts::new(dir, "src", SolidityConfig::default())
    }

    #[test]
    fn loads_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "RosetteStone", STOP_INIT_CODE);
        let artifact = artifacts(dir.path()).load("RosetteStone").unwrap();
        assert_eq!(artifact.contract_name, "RosetteStone");
        assert_eq!(artifact.bytecode.len(), 13);
        assert_eq!(artifact.bytecode_hash(), keccak256(&artifact.bytecode));
    }

    #[test]
    fn ignores_debug_files() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "RosetteStone", STOP_INIT_CODE);
        write_build_info(dir.path(), "RosetteStone", "0.8.13", 10000);
        let path = artifacts(dir.path()).find("RosetteStone").unwrap();
        assert!(path.ends_with("src/RosetteStone.sol/RosetteStone.json"));
        assert!(artifacts(dir.path()).load("RosetteStone").is_ok());
    }

    #[test]
    fn missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            artifacts(dir.path()).load("RosetteStone"),
            Err(ArtifactError::NotFound(_))
        ));
    }

    #[test]
    fn interface_is_not_deployable() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "IRosetteStone", "0x");
        assert!(matches!(
            artifacts(dir.path()).load("IRosetteStone"),
            Err(ArtifactError::NotDeployable(_))
        ));
    }

    #[test]
    fn source_must_be_under_sources_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "RosetteStone", STOP_INIT_CODE);
        let artifacts = Artifacts::new(dir.path(), "contracts", SolidityConfig::default());
        assert!(matches!(
            artifacts.load("RosetteStone"),
            Err(ArtifactError::OutsideSources { .. })
        ));
    }

    #[test]
    fn compiler_mismatch_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "RosetteStone", STOP_INIT_CODE);
        write_build_info(dir.path(), "RosetteStone", "0.8.13", 200);
        assert!(matches!(
            artifacts(dir.path()).load("RosetteStone"),
            Err(ArtifactError::CompilerMismatch { .. })
        ));
    }
}
