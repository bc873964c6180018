// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    config::ConfigError,
    core::{
        accounts::AccountError, deployment::DeploymentError, monitoring::MonitoringError,
    },
    runtime::RuntimeError,
    tasks::TaskError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Runtime(#[from] RuntimeError),
    #[error("{0}")]
    Account(#[from] AccountError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Task(#[from] TaskError),
    #[error("{0}")]
    Monitoring(#[from] MonitoringError),
    #[error("no deployment named {name:?} on {network}")]
    NotDeployed { name: String, network: String },
}
