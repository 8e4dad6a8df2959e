//! Implementations of the deploy & mint scripts
//!
//! Every step awaits confirmation of its transaction before the next one
//! starts, and the first failing step aborts the whole script.

use std::{io::Write, path::PathBuf};

use alloy::primitives::{Address, Bytes};
use tracing::{debug, info};

use crate::{
    artifact::ContractFactory,
    cli::{DeployAndMintArgs, MintArgs},
    deployer::{Deployment, MintReceipt, NftDeployer},
    errors::ScriptError,
    utils::write_deployed_address,
};

/// Settings shared by every command
pub struct ScriptContext {
    /// The factory for the NFT contract
    pub factory: ContractFactory,
    /// The name of the contract method that mints one token
    pub mint_function: String,
    /// Where to record deployed addresses, if anywhere
    pub deployments_path: Option<PathBuf>,
}

/// Deploy the NFT contract, then mint `args.mints` tokens on it one after another.
///
/// A contract deployed before a failing mint is left in place.
pub async fn deploy_and_mint(
    args: DeployAndMintArgs,
    deployer: &impl NftDeployer,
    ctx: &ScriptContext,
    out: &mut impl Write,
) -> Result<Address, ScriptError> {
    let calldata = ctx.factory.mint_calldata(&ctx.mint_function)?;

    let address = deploy(deployer, ctx, out).await?;
    mint_tokens(deployer, address, &calldata, args.mints, out).await?;

    Ok(address)
}

/// Deploy the NFT contract and report its address
pub async fn deploy(
    deployer: &impl NftDeployer,
    ctx: &ScriptContext,
    out: &mut impl Write,
) -> Result<Address, ScriptError> {
    info!("Deploying {}...", ctx.factory.name());
    let Deployment { address, tx_hash } = deployer.deploy(&ctx.factory).await?;
    info!("Deployment confirmed in tx {:#x}", tx_hash);

    writeln!(out, "Contract deployed to:  {address}")
        .map_err(|e| ScriptError::Output(e.to_string()))?;

    if let Some(path) = &ctx.deployments_path {
        write_deployed_address(path, ctx.factory.name(), address)?;
        debug!("Recorded deployment in {}", path.display());
    }

    Ok(address)
}

/// Mint tokens on an already deployed NFT contract, returning the receipts in mint order
pub async fn mint(
    args: MintArgs,
    deployer: &impl NftDeployer,
    ctx: &ScriptContext,
    out: &mut impl Write,
) -> Result<Vec<MintReceipt>, ScriptError> {
    let calldata = ctx.factory.mint_calldata(&ctx.mint_function)?;
    mint_tokens(deployer, args.contract, &calldata, args.mints, out).await
}

/// Send `num_mints` mint transactions, waiting for each to be confirmed
async fn mint_tokens(
    deployer: &impl NftDeployer,
    contract: Address,
    calldata: &Bytes,
    num_mints: usize,
    out: &mut impl Write,
) -> Result<Vec<MintReceipt>, ScriptError> {
    let mut receipts = Vec::with_capacity(num_mints);
    for i in 1..=num_mints {
        let receipt = deployer.mint(contract, calldata).await?;
        match receipt.token_id {
            Some(id) => info!(
                "Mint #{} confirmed in tx {:#x} (token {})",
                i, receipt.tx_hash, id
            ),
            None => info!("Mint #{} confirmed in tx {:#x}", i, receipt.tx_hash),
        }

        writeln!(out, "Minted NFT #{i}").map_err(|e| ScriptError::Output(e.to_string()))?;
        receipts.push(receipt);
    }

    Ok(receipts)
}
