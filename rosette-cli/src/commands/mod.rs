// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::ProjectArgs, error::RosetteResult};

mod accounts;
mod config;
mod deploy;
mod tenderly_push;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run deployment tasks against a network
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Print the resolved configuration
    Config(config::Args),
    /// List the accounts derived for a network
    Accounts(accounts::Args),
    /// Add stored deployments to the Tenderly project
    TenderlyPush(tenderly_push::Args),
}

pub async fn exec(cmd: Command, project: &ProjectArgs) -> RosetteResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args, project).await,
        Command::Config(args) => config::exec(args, project),
        Command::Accounts(args) => accounts::exec(args, project),
        Command::TenderlyPush(args) => tenderly_push::exec(args, project).await,
    }
}
