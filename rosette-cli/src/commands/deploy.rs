// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use rosette_tools::{ops, tasks::Tag};

use crate::{
    common_args::{NetworkArgs, ProjectArgs},
    error::RosetteResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only run tasks carrying one of these tags (all tasks when omitted)
    #[arg(long, value_delimiter = ',')]
    tags: Vec<Tag>,
    /// Push newly deployed contracts to the Tenderly project
    #[arg(long)]
    report: bool,

    #[command(flatten)]
    network: NetworkArgs,
}

pub async fn exec(args: Args, project: &ProjectArgs) -> RosetteResult {
    let config = project.config()?;
    let network = args.network.resolve(&config);
    ops::deploy(&config, network, &args.tags, args.report).await?;
    Ok(())
}
