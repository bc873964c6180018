// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use rosette_tools::{ops, NetworkName};

use crate::{common_args::ProjectArgs, error::RosetteResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only print this network
    #[arg(short, long)]
    network: Option<NetworkName>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn exec(args: Args, project: &ProjectArgs) -> RosetteResult {
    let config = project.config()?;
    ops::print_config(&config, args.network, args.json)?;
    Ok(())
}
