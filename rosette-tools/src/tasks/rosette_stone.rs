// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use super::TaskError;
use crate::{
    core::{accounts::DEPLOYER, deployment::DeployOptions},
    runtime::Runtime,
};

pub const CONTRACT: &str = "RosetteStone";
pub const ROLE: &str = DEPLOYER;
pub const LOG: bool = true;

pub async fn run(runtime: &mut Runtime) -> Result<(), TaskError> {
    let deployer = runtime.named_account(ROLE)?;
    let options = DeployOptions::builder().from(deployer).log(LOG).build();
    runtime.deployments().deploy(CONTRACT, options).await?;
    Ok(())
}
