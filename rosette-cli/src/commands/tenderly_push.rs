// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use rosette_tools::ops;

use crate::{
    common_args::{NetworkArgs, ProjectArgs},
    error::RosetteResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Names of the deployments to push
    #[arg(required = true)]
    names: Vec<String>,

    #[command(flatten)]
    network: NetworkArgs,
}

pub async fn exec(args: Args, project: &ProjectArgs) -> RosetteResult {
    let config = project.config()?;
    let network = args.network.resolve(&config);
    ops::tenderly_push(&config, network, &args.names).await?;
    Ok(())
}
