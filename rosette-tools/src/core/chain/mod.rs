// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Chains deployments are sent to.

use alloy::primitives::{Address, Bytes, TxHash, U256};

use crate::{
    config::GasPrice,
    utils::color::{Color, DebugColor},
};

pub use rpc::RpcChain;
pub use simulated::SimulatedChain;

pub mod rpc;
pub mod simulated;

/// A contract creation transaction.
#[derive(Debug, Clone)]
pub struct DeploymentTx {
    pub from: Address,
    pub init_code: Bytes,
    pub gas_price: GasPrice,
}

/// Outcome of a mined contract creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub address: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    #[error("no signer available on this network")]
    NoSigners,
    #[error("sender {} is not an account of this network", .0.red())]
    UnknownSender(Address),
    #[error("deployment has no init code")]
    EmptyInitCode,
    #[error("gas estimation failed: {0}")]
    GasEstimationFailure(String),
    #[error("deployment needs {gas} gas, above the block gas limit of {limit}")]
    GasLimitExceeded { gas: u64, limit: u64 },
    #[error(
        "not enough funds in account {} to pay for deployment\nbalance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .cost).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        cost: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .0.debug_red())]
    NoContractAddress(TxHash),
}

/// The chain backing the active network.
#[derive(Debug)]
pub enum Chain {
    Simulated(SimulatedChain),
    Rpc(RpcChain),
}

impl Chain {
    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Simulated(chain) => chain.chain_id(),
            Chain::Rpc(chain) => chain.chain_id(),
        }
    }

    /// Sends a contract creation and waits for it to be mined.
    pub async fn deploy(&mut self, tx: DeploymentTx) -> Result<DeploymentReceipt, ChainError> {
        if tx.init_code.is_empty() {
            return Err(ChainError::EmptyInitCode);
        }
        match self {
            Chain::Simulated(chain) => chain.deploy(tx),
            Chain::Rpc(chain) => chain.deploy(tx).await,
        }
    }

    /// Whether contract code is present at `address`.
    pub async fn has_code(&self, address: Address) -> Result<bool, ChainError> {
        match self {
            Chain::Simulated(chain) => Ok(chain.has_code(address)),
            Chain::Rpc(chain) => chain.has_code(address).await,
        }
    }

    pub fn as_simulated(&self) -> Option<&SimulatedChain> {
        match self {
            Chain::Simulated(chain) => Some(chain),
            Chain::Rpc(_) => None,
        }
    }
}
