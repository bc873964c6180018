// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod accounts;
pub mod artifact;
pub mod chain;
pub mod deployment;
pub mod monitoring;
