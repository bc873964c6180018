// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use rosette_tools::ops;

use crate::{
    common_args::{NetworkArgs, ProjectArgs},
    error::RosetteResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args, project: &ProjectArgs) -> RosetteResult {
    let config = project.config()?;
    ops::print_accounts(&config, args.network.resolve(&config))?;
    Ok(())
}
