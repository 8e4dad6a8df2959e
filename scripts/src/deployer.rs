//! The capability to deploy NFT contracts and mint tokens on them

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::{DynProvider, Provider},
    rpc::types::{Log, TransactionReceipt, TransactionRequest},
};
use tracing::debug;

use crate::{artifact::ContractFactory, errors::ScriptError, solidity::IMyEpicNFT::Transfer};

/// A confirmed contract deployment
#[derive(Clone, Copy, Debug)]
pub struct Deployment {
    /// The address of the deployed contract
    pub address: Address,
    /// The hash of the deployment transaction
    pub tx_hash: TxHash,
}

/// A confirmed mint transaction
#[derive(Clone, Copy, Debug)]
pub struct MintReceipt {
    /// The hash of the mint transaction
    pub tx_hash: TxHash,
    /// The ID of the minted token, if the contract emitted a `Transfer` event for it
    pub token_id: Option<U256>,
}

/// Deploys NFT contracts and submits mint transactions to them.
///
/// Both methods resolve only once the transaction is confirmed.
#[allow(async_fn_in_trait)]
pub trait NftDeployer {
    /// Deploy a new instance of the factory's contract
    async fn deploy(&self, factory: &ContractFactory) -> Result<Deployment, ScriptError>;

    /// Send the given mint calldata to a deployed contract
    async fn mint(&self, contract: Address, calldata: &Bytes) -> Result<MintReceipt, ScriptError>;
}

/// An [`NftDeployer`] submitting signed transactions through an RPC provider
pub struct ChainDeployer {
    /// The provider, with the deployer's wallet attached
    provider: DynProvider,
    /// The address transactions are sent from
    sender: Address,
    /// The number of confirmations to wait for on each transaction
    confirmations: u64,
}

impl ChainDeployer {
    /// Create a deployer sending from `sender` through the given provider
    pub fn new(provider: DynProvider, sender: Address, confirmations: u64) -> Self {
        Self {
            provider,
            sender,
            confirmations,
        }
    }

    /// The address transactions are sent from
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// The underlying provider
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Send a transaction and wait for it to be confirmed, erroring if it reverted
    async fn send_and_confirm(
        &self,
        tx: TransactionRequest,
        to_err: fn(String) -> ScriptError,
    ) -> Result<TransactionReceipt, ScriptError> {
        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| to_err(e.to_string()))?;

        let tx_hash = *pending_tx.tx_hash();
        debug!(
            "Sent tx {:#x}, waiting for {} confirmation(s)",
            tx_hash, self.confirmations
        );

        let receipt = pending_tx
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| to_err(e.to_string()))?;

        check_status(tx_hash, receipt.status())?;
        Ok(receipt)
    }
}

impl NftDeployer for ChainDeployer {
    async fn deploy(&self, factory: &ContractFactory) -> Result<Deployment, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_deploy_code(factory.bytecode().clone());

        let receipt = self
            .send_and_confirm(tx, ScriptError::ContractDeployment)
            .await?;

        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "receipt for {:#x} has no contract address",
                receipt.transaction_hash
            ))
        })?;

        Ok(Deployment {
            address,
            tx_hash: receipt.transaction_hash,
        })
    }

    async fn mint(&self, contract: Address, calldata: &Bytes) -> Result<MintReceipt, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_to(contract)
            .with_input(calldata.clone());

        let receipt = self
            .send_and_confirm(tx, ScriptError::ContractInteraction)
            .await?;

        Ok(MintReceipt {
            tx_hash: receipt.transaction_hash,
            token_id: minted_token_id(receipt.inner.logs(), contract),
        })
    }
}

/// Error if the receipt status of the given transaction marks it as reverted
fn check_status(tx_hash: TxHash, status: bool) -> Result<(), ScriptError> {
    if !status {
        return Err(ScriptError::TransactionReverted(format!("{tx_hash:#x}")));
    }
    Ok(())
}

/// Find the ID of the token minted by `contract` among a receipt's logs.
///
/// A mint is a `Transfer` from the zero address.
fn minted_token_id(logs: &[Log], contract: Address) -> Option<U256> {
    logs.iter()
        .filter(|log| log.address() == contract)
        .filter_map(|log| log.log_decode::<Transfer>().ok())
        .find(|transfer| transfer.inner.data.from == Address::ZERO)
        .map(|transfer| transfer.inner.data.tokenId)
}
