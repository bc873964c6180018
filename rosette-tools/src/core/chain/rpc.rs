// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};

use super::{ChainError, DeploymentReceipt, DeploymentTx};
use crate::{config::GasPrice, utils::color::DebugColor};

/// A live network reached over JSON-RPC, signing with every derived account.
pub struct RpcChain {
    provider: DynProvider,
    chain_id: u64,
}

impl std::fmt::Debug for RpcChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcChain")
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

impl RpcChain {
    pub async fn connect(url: &str, signers: Vec<PrivateKeySigner>) -> Result<Self, ChainError> {
        let mut signers = signers.into_iter();
        let mut wallet = EthereumWallet::new(signers.next().ok_or(ChainError::NoSigners)?);
        for signer in signers {
            wallet.register_signer(signer);
        }
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(url)
            .await?
            .erased();
        let chain_id = provider.get_chain_id().await?;
        debug!(@grey, "connected to chain {chain_id} at {url}");
        Ok(Self { provider, chain_id })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub async fn has_code(&self, address: Address) -> Result<bool, ChainError> {
        let code = self.provider.get_code_at(address).await?;
        Ok(!code.is_empty())
    }

    pub async fn deploy(&self, tx: DeploymentTx) -> Result<DeploymentReceipt, ChainError> {
        let mut request = TransactionRequest::default()
            .with_from(tx.from)
            .with_deploy_code(tx.init_code);

        let gas = self
            .provider
            .estimate_gas(request.clone())
            .await
            .map_err(|err| ChainError::GasEstimationFailure(err.to_string()))?;
        request.gas = Some(gas);
        match tx.gas_price {
            GasPrice::Fixed(wei) => request.gas_price = Some(wei),
            GasPrice::Auto => {
                let fees = self.provider.estimate_eip1559_fees().await?;
                request.max_fee_per_gas = Some(fees.max_fee_per_gas);
                request.max_priority_fee_per_gas = Some(fees.max_priority_fee_per_gas);
            }
        }

        let pending = self.provider.send_transaction(request).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(ChainError::Reverted { tx_hash });
        }
        let address = receipt
            .contract_address
            .ok_or(ChainError::NoContractAddress(tx_hash))?;

        Ok(DeploymentReceipt {
            address,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}
