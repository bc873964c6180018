// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! In-process simulated chain.
//!
//! Tracks what a deployment needs (nonces, balances, fees, code presence) without executing
//! EVM code. Every transaction is mined immediately in its own block.

use std::collections::HashMap;

use alloy::primitives::{keccak256, Address, Bytes, TxHash, U256};

use super::{ChainError, DeploymentReceipt, DeploymentTx};
use crate::config::{GasPrice, SimulatedNetwork};

pub const DEFAULT_BLOCK_GAS_LIMIT: u64 = 30_000_000;

const TX_BASE_GAS: u64 = 21_000;
const CREATE_GAS: u64 = 32_000;
const ZERO_BYTE_GAS: u64 = 4;
const NONZERO_BYTE_GAS: u64 = 16;
const INIT_CODE_WORD_GAS: u64 = 2;

/// Balance each account starts with, in wei (10000 ETH).
pub fn initial_balance() -> U256 {
    U256::from(10_000u64) * U256::from(10u64).pow(U256::from(18u64))
}

/// A transaction mined by the simulated chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedTransaction {
    pub hash: TxHash,
    pub from: Address,
    pub nonce: u64,
    pub block_number: u64,
    pub contract_address: Address,
}

#[derive(Debug)]
pub struct SimulatedChain {
    chain_id: u64,
    base_fee_per_gas: u128,
    block_gas_limit: u64,
    block_number: u64,
    nonces: HashMap<Address, u64>,
    balances: HashMap<Address, U256>,
    code: HashMap<Address, Bytes>,
    transactions: Vec<SimulatedTransaction>,
}

impl SimulatedChain {
    /// Starts a chain where each of `accounts` holds [`initial_balance`].
    pub fn new(network: &SimulatedNetwork, accounts: &[Address]) -> Self {
        Self {
            chain_id: network.chain_id,
            base_fee_per_gas: network.initial_base_fee_per_gas,
            block_gas_limit: DEFAULT_BLOCK_GAS_LIMIT,
            block_number: 0,
            nonces: HashMap::new(),
            balances: accounts
                .iter()
                .map(|account| (*account, initial_balance()))
                .collect(),
            code: HashMap::new(),
            transactions: Vec::new(),
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn base_fee_per_gas(&self) -> u128 {
        self.base_fee_per_gas
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    pub fn balance(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn nonce(&self, account: Address) -> u64 {
        self.nonces.get(&account).copied().unwrap_or_default()
    }

    pub fn has_code(&self, address: Address) -> bool {
        self.code.contains_key(&address)
    }

    /// Transactions mined so far, oldest first.
    pub fn transactions(&self) -> &[SimulatedTransaction] {
        &self.transactions
    }

    pub fn deploy(&mut self, tx: DeploymentTx) -> Result<DeploymentReceipt, ChainError> {
        let balance = *self
            .balances
            .get(&tx.from)
            .ok_or(ChainError::UnknownSender(tx.from))?;

        let gas = intrinsic_gas(&tx.init_code);
        if gas > self.block_gas_limit {
            return Err(ChainError::GasLimitExceeded {
                gas,
                limit: self.block_gas_limit,
            });
        }
        let gas_price = match tx.gas_price {
            GasPrice::Auto => self.base_fee_per_gas,
            GasPrice::Fixed(wei) => wei.max(self.base_fee_per_gas),
        };
        let cost = U256::from(gas) * U256::from(gas_price);
        if balance < cost {
            return Err(ChainError::NotEnoughFunds {
                from_address: tx.from,
                balance,
                cost,
            });
        }

        let nonce = self.nonce(tx.from);
        let address = tx.from.create(nonce);
        let hash = transaction_hash(tx.from, nonce, &tx.init_code);

        self.block_number += 1;
        self.nonces.insert(tx.from, nonce + 1);
        self.balances.insert(tx.from, balance - cost);
        self.code.insert(address, tx.init_code);
        self.transactions.push(SimulatedTransaction {
            hash,
            from: tx.from,
            nonce,
            block_number: self.block_number,
            contract_address: address,
        });

        Ok(DeploymentReceipt {
            address,
            transaction_hash: hash,
            block_number: Some(self.block_number),
            gas_used: gas,
        })
    }
}

/// Gas charged for a contract creation before any code runs.
pub fn intrinsic_gas(init_code: &[u8]) -> u64 {
    let data: u64 = init_code
        .iter()
        .map(|byte| {
            if *byte == 0 {
                ZERO_BYTE_GAS
            } else {
                NONZERO_BYTE_GAS
            }
        })
        .sum();
    let words = init_code.len().div_ceil(32) as u64;
    TX_BASE_GAS + CREATE_GAS + data + words * INIT_CODE_WORD_GAS
}

fn transaction_hash(from: Address, nonce: u64, init_code: &[u8]) -> TxHash {
    let mut preimage = Vec::with_capacity(20 + 8 + init_code.len());
    preimage.extend_from_slice(from.as_slice());
    preimage.extend_from_slice(&nonce.to_be_bytes());
    preimage.extend_from_slice(init_code);
    keccak256(preimage)
}
