// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the Rosette contracts.

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod runtime;
pub mod tasks;

pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use config::{Config, Env, NetworkName};
pub use error::{Error, Result};
pub use runtime::Runtime;
