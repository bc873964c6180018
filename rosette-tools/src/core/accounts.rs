// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Account derivation and named account roles.

use std::collections::BTreeMap;

use alloy::{
    primitives::Address,
    signers::local::{coins_bip39::English, LocalSignerError, MnemonicBuilder, PrivateKeySigner},
};
use serde::Serialize;

use crate::{config::AccountSource, utils::color::Color};

/// Role used by deployment tasks to send transactions.
pub const DEPLOYER: &str = "deployer";

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("signer error: {0}")]
    Signer(#[from] LocalSignerError),

    #[error("unknown named account {}", .0.red())]
    UnknownRole(String),
    #[error("no accounts available on the active network")]
    NoAccounts,
    #[error(
        "named account {} points at index {index}, but the network only has {available} accounts",
        .role.red()
    )]
    IndexOutOfRange {
        role: String,
        index: u32,
        available: usize,
    },
}

/// Symbolic account roles, each mapped to an index into the active network's accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedAccounts(BTreeMap<String, u32>);

impl Default for NamedAccounts {
    fn default() -> Self {
        Self::from_iter([(DEPLOYER, 0)])
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for NamedAccounts {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl NamedAccounts {
    pub fn index(&self, role: &str) -> Option<u32> {
        self.0.get(role).copied()
    }

    pub fn roles(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(role, index)| (role.as_str(), *index))
    }

    /// Resolves `role` against the accounts of the active network.
    pub fn resolve(&self, role: &str, accounts: &[Address]) -> Result<Address, AccountError> {
        let index = self
            .index(role)
            .ok_or_else(|| AccountError::UnknownRole(role.to_string()))?;
        if accounts.is_empty() {
            return Err(AccountError::NoAccounts);
        }
        accounts
            .get(index as usize)
            .copied()
            .ok_or_else(|| AccountError::IndexOutOfRange {
                role: role.to_string(),
                index,
                available: accounts.len(),
            })
    }

    /// Resolves every role.
    pub fn resolve_all(
        &self,
        accounts: &[Address],
    ) -> Result<BTreeMap<String, Address>, AccountError> {
        self.0
            .keys()
            .map(|role| Ok::<_, AccountError>((role.clone(), self.resolve(role, accounts)?)))
            .collect()
    }
}

/// Derives the signers described by an account source.
pub fn derive_signers(source: &AccountSource) -> Result<Vec<PrivateKeySigner>, AccountError> {
    match source {
        AccountSource::Mnemonic {
            phrase,
            path,
            initial_index,
            count,
        } => (*initial_index..initial_index + count)
            .map(|index| {
                let signer = MnemonicBuilder::<English>::default()
                    .phrase(phrase.as_str())
                    .derivation_path(format!("{path}{index}"))?
                    .build()?;
                Ok::<_, AccountError>(signer)
            })
            .collect(),
    }
}
