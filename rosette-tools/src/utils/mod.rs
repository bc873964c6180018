// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use color::Color;

use crate::config::GasPrice;

pub mod color;

const WEI_PER_GWEI: u128 = 1_000_000_000;

/// Pretty-prints a wei amount in gwei, keeping up to nine decimals.
pub fn format_gwei(wei: u128) -> String {
    let whole = wei / WEI_PER_GWEI;
    let frac = wei % WEI_PER_GWEI;
    if frac == 0 {
        return format!("{whole} gwei");
    }
    let frac = format!("{frac:09}");
    format!("{whole}.{} gwei", frac.trim_end_matches('0'))
}

/// Pretty-prints a network fee policy.
pub fn format_gas_price(price: GasPrice) -> String {
    match price {
        GasPrice::Auto => "auto".grey(),
        GasPrice::Fixed(wei) => format_gwei(wei).mint(),
    }
}
