// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Pushes deployed contracts to a Tenderly project so they show up in its dashboard.

use serde::Serialize;

use crate::{
    config::TenderlyConfig,
    core::deployment::DeploymentRecord,
    utils::color::DebugColor,
};

pub const TENDERLY_API_URL: &str = "https://api.tenderly.co/api/v1";

const ACCESS_KEY_HEADER: &str = "X-Access-Key";

#[derive(Debug, thiserror::Error)]
pub enum MonitoringError {
    #[error("tenderly username is not set (TENDERLY_USERNAME)")]
    MissingUsername,
    #[error("tenderly access key is not set (TENDERLY_ACCESS_KEY)")]
    MissingAccessKey,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("tenderly rejected {address}: {status}: {body}")]
    Rejected {
        address: String,
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Body of an "add contract to project" request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractEntry {
    pub network_id: String,
    pub address: String,
    pub display_name: String,
}

impl ContractEntry {
    pub fn new(chain_id: u64, record: &DeploymentRecord) -> Self {
        Self {
            network_id: chain_id.to_string(),
            address: record.address.to_checksum(None),
            display_name: record.name.clone(),
        }
    }
}

pub struct TenderlyClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    project: String,
    access_key: String,
}

impl std::fmt::Debug for TenderlyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenderlyClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}

impl TenderlyClient {
    /// Builds a client from the resolved configuration.
    ///
    /// Credentials are only checked here, so a configuration without them stays usable for
    /// everything except pushing.
    pub fn from_config(config: &TenderlyConfig) -> Result<Self, MonitoringError> {
        let username = config
            .username
            .clone()
            .ok_or(MonitoringError::MissingUsername)?;
        let access_key = config
            .access_key
            .clone()
            .ok_or(MonitoringError::MissingAccessKey)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: TENDERLY_API_URL.to_string(),
            username,
            project: config.project.clone(),
            access_key,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/account/{}/project/{}/address",
            self.base_url.trim_end_matches('/'),
            self.username,
            self.project
        )
    }

    /// Adds the deployed contract in `record` to the project.
    pub async fn push(
        &self,
        chain_id: u64,
        record: &DeploymentRecord,
    ) -> Result<(), MonitoringError> {
        let entry = ContractEntry::new(chain_id, record);
        debug!(@grey, "pushing {} to tenderly project {}", entry.address, self.project);

        let response = self
            .http
            .post(self.endpoint())
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .json(&entry)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MonitoringError::Rejected {
                address: entry.address,
                status,
                body,
            });
        }

        info!(@grey, "added {} to tenderly project {}", record.name.debug_mint(), self.project.mint());
        Ok(())
    }
}
