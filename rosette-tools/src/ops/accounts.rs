// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{primitives::Address, signers::local::PrivateKeySigner};

use crate::{
    config::{Config, NetworkName},
    core::accounts::derive_signers,
    Result,
};

/// Prints the accounts derived for `network`, marking the ones with a role.
///
/// Nothing is sent to the network, so this works without an endpoint.
pub fn print_accounts(config: &Config, network: NetworkName) -> Result<Vec<Address>> {
    let source = config.network(network)?.accounts();
    let accounts: Vec<Address> = derive_signers(source)?
        .iter()
        .map(PrivateKeySigner::address)
        .collect();

    greyln!("accounts for {}:", network.as_str().mint());
    for (index, address) in accounts.iter().enumerate() {
        let roles: Vec<&str> = config
            .named_accounts
            .roles()
            .filter(|(_, role_index)| *role_index as usize == index)
            .map(|(role, _)| role)
            .collect();
        if roles.is_empty() {
            greyln!("  [{index}] {}", address.lavender());
        } else {
            greyln!("  [{index}] {} ({})", address.lavender(), roles.join(", ").mint());
        }
    }
    Ok(accounts)
}
