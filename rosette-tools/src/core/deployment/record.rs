// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment records and their storage.
//!
//! Live networks keep one `<Name>.json` per contract under `deployments/<network>/`, next to a
//! `.chainId` file naming the chain the records belong to. The simulated network keeps its
//! records in memory, so they last for one session.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, TxHash, B256};
use serde::{Deserialize, Serialize};

const CHAIN_ID_FILE: &str = ".chainId";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid chain id in {path:?}: {contents:?}")]
    InvalidChainId { path: PathBuf, contents: String },
    #[error("deployments in {dir:?} belong to chain {stored}, but the network is chain {actual}")]
    ChainIdMismatch { dir: PathBuf, stored: u64, actual: u64 },
}

/// A deployed contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub name: String,
    pub address: Address,
    pub from: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub bytecode_hash: B256,
    #[serde(default)]
    pub abi: serde_json::Value,
}

#[derive(Debug, Default)]
pub struct DeploymentStore {
    dir: Option<PathBuf>,
    records: BTreeMap<String, DeploymentRecord>,
}

impl DeploymentStore {
    /// A store that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens (creating if needed) the store at `dir` for the chain `chain_id`.
    pub fn open(dir: impl Into<PathBuf>, chain_id: u64) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        check_chain_id(&dir, chain_id)?;

        let mut records = BTreeMap::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let record = read_record(&path)?;
                records.insert(record.name.clone(), record);
            }
        }
        debug!(@grey, "loaded {} deployment(s) from {}", records.len(), dir.display());
        Ok(Self {
            dir: Some(dir),
            records,
        })
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&DeploymentRecord> {
        self.records.get(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &DeploymentRecord> {
        self.records.values()
    }

    /// Stores `record`, replacing any previous record with the same name.
    pub fn save(&mut self, record: DeploymentRecord) -> Result<(), StoreError> {
        if let Some(dir) = &self.dir {
            let path = dir.join(format!("{}.json", record.name));
            let json = serde_json::to_string_pretty(&record).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;
            fs::write(&path, json)?;
        }
        self.records.insert(record.name.clone(), record);
        Ok(())
    }
}

fn check_chain_id(dir: &Path, chain_id: u64) -> Result<(), StoreError> {
    let path = dir.join(CHAIN_ID_FILE);
    if !path.exists() {
        fs::write(&path, chain_id.to_string())?;
        return Ok(());
    }
    let contents = fs::read_to_string(&path)?;
    let stored: u64 = contents
        .trim()
        .parse()
        .map_err(|_| StoreError::InvalidChainId {
            path: path.clone(),
            contents: contents.clone(),
        })?;
    if stored != chain_id {
        return Err(StoreError::ChainIdMismatch {
            dir: dir.to_path_buf(),
            stored,
            actual: chain_id,
        });
    }
    Ok(())
}

fn read_record(path: &Path) -> Result<DeploymentRecord, StoreError> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use alloy::primitives::keccak256;

    use super::*;

    fn record(name: &str) -> DeploymentRecord {
        DeploymentRecord {
            name: name.to_string(),
            address: Address::repeat_byte(0x11),
            from: Address::repeat_byte(0x22),
            transaction_hash: keccak256(name),
            block_number: Some(7),
            gas_used: 53_000,
            bytecode_hash: keccak256("code"),
            abi: serde_json::json!([]),
        }
    }

    #[test]
    fn records_persist_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DeploymentStore::open(dir.path(), 5).unwrap();
        store.save(record("RosetteStone")).unwrap();
        assert!(dir.path().join("RosetteStone.json").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join(".chainId")).unwrap(),
            "5"
        );

        let reopened = DeploymentStore::open(dir.path(), 5).unwrap();
        assert_eq!(reopened.get("RosetteStone"), Some(&record("RosetteStone")));
    }

    #[test]
    fn record_json_uses_camel_case() {
        let json = serde_json::to_value(record("RosetteStone")).unwrap();
        assert_eq!(json["name"], "RosetteStone");
        assert!(json.get("transactionHash").is_some());
        assert!(json.get("bytecodeHash").is_some());
    }

    #[test]
    fn chain_id_mismatch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        DeploymentStore::open(dir.path(), 5).unwrap();
        assert!(matches!(
            DeploymentStore::open(dir.path(), 100),
            Err(StoreError::ChainIdMismatch {
                stored: 5,
                actual: 100,
                ..
            })
        ));
    }

    #[test]
    fn in_memory_store_writes_nothing() {
        let mut store = DeploymentStore::in_memory();
        store.save(record("RosetteStone")).unwrap();
        assert!(store.dir().is_none());
        assert_eq!(store.records().count(), 1);
    }
}
