// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use accounts::print_accounts;
pub use config::print_config;
pub use deploy::deploy;
pub use tenderly::tenderly_push;

mod accounts;
mod config;
mod deploy;
mod tenderly;
