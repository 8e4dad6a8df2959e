//! Definitions of CLI arguments and commands for the deploy & mint scripts

use std::{io::Write, path::PathBuf};

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, deploy_and_mint, mint, ScriptContext},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACT_NAME, DEFAULT_MINT_FUNCTION,
        DEFAULT_NUM_CONFIRMATIONS, DEFAULT_NUM_MINTS, DEFAULT_PKEY, DEFAULT_RPC_URL,
    },
    deployer::NftDeployer,
    errors::ScriptError,
};

/// Deploy the Epic NFT contract and mint tokens on it
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PKEY", default_value = DEFAULT_PKEY)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Directory containing the contract compilation artifacts
    #[arg(long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Name of the contract to deploy
    #[arg(long, default_value = DEFAULT_CONTRACT_NAME)]
    pub contract_name: String,

    /// Name of the zero-argument contract method that mints one token
    #[arg(long, default_value = DEFAULT_MINT_FUNCTION)]
    pub mint_function: String,

    /// Number of confirmations to wait for on every transaction
    #[arg(
        long,
        default_value_t = DEFAULT_NUM_CONFIRMATIONS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub confirmations: u64,

    /// Path to a JSON file in which to record deployed addresses
    #[arg(long)]
    pub deployments_path: Option<PathBuf>,

    /// The command to run, deploying and minting when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The commands supported by the scripts
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Deploy the contract, then mint tokens on it
    DeployAndMint(DeployAndMintArgs),
    /// Deploy the contract only
    Deploy,
    /// Mint tokens on an already deployed contract
    Mint(MintArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::DeployAndMint(DeployAndMintArgs {
            mints: DEFAULT_NUM_MINTS,
        })
    }
}

impl Command {
    /// Run the command, writing progress lines to `out`
    pub async fn run(
        self,
        deployer: &impl NftDeployer,
        ctx: &ScriptContext,
        out: &mut impl Write,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployAndMint(args) => deploy_and_mint(args, deployer, ctx, out)
                .await
                .map(|_| ()),
            Command::Deploy => deploy(deployer, ctx, out).await.map(|_| ()),
            Command::Mint(args) => mint(args, deployer, ctx, out).await.map(|_| ()),
        }
    }
}

/// Deploy the contract and mint tokens on it
#[derive(Args, Debug, PartialEq, Eq)]
pub struct DeployAndMintArgs {
    /// Number of tokens to mint after deploying
    #[arg(short, long, default_value_t = DEFAULT_NUM_MINTS)]
    pub mints: usize,
}

/// Mint tokens on a deployed contract
#[derive(Args, Debug, PartialEq, Eq)]
pub struct MintArgs {
    /// Address of the deployed contract
    #[arg(short, long)]
    pub contract: Address,

    /// Number of tokens to mint
    #[arg(short, long, default_value_t = DEFAULT_NUM_MINTS)]
    pub mints: usize,
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::commands::tests::{context, lines, MockDeployer, NFT_ADDRESS};

    #[test]
    fn test_no_arguments_deploys_and_mints_twice() {
        let cli = Cli::try_parse_from(["epic-nft"]).unwrap();

        assert_eq!(cli.contract_name, "MyEpicNFT");
        assert_eq!(cli.mint_function, "makeAnEpicNFT");
        assert_eq!(cli.confirmations, 1);
        assert!(cli.deployments_path.is_none());
        assert_eq!(
            cli.command.unwrap_or_default(),
            Command::DeployAndMint(DeployAndMintArgs { mints: 2 })
        );
    }

    #[test]
    fn test_parse_mint_command() {
        let cli = Cli::try_parse_from([
            "epic-nft",
            "--confirmations",
            "3",
            "mint",
            "--contract",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "--mints",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.confirmations, 3);
        assert_eq!(
            cli.command,
            Some(Command::Mint(MintArgs {
                contract: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
                mints: 5,
            }))
        );
    }

    #[test]
    fn test_mint_requires_contract() {
        assert!(Cli::try_parse_from(["epic-nft", "mint"]).is_err());
    }

    #[test]
    fn test_invalid_contract_address_rejected() {
        assert!(Cli::try_parse_from(["epic-nft", "mint", "--contract", "0x1234"]).is_err());
    }

    #[test]
    fn test_zero_confirmations_rejected() {
        assert!(Cli::try_parse_from(["epic-nft", "--confirmations", "0"]).is_err());
    }

    #[tokio::test]
    async fn test_default_command_deploys_and_mints() {
        let deployer = MockDeployer::default();
        let mut out = Vec::new();

        Command::default()
            .run(&deployer, &context(None), &mut out)
            .await
            .unwrap();

        assert_eq!(lines(out).len(), 3);
        assert_eq!(deployer.minted.get(), 2);
    }

    #[tokio::test]
    async fn test_deploy_command_skips_mints() {
        let deployer = MockDeployer::default();
        let mut out = Vec::new();

        Command::Deploy
            .run(&deployer, &context(None), &mut out)
            .await
            .unwrap();

        assert_eq!(
            lines(out),
            vec![format!("Contract deployed to:  {NFT_ADDRESS}")]
        );
        assert_eq!(deployer.minted.get(), 0);
    }

    #[tokio::test]
    async fn test_command_failure_propagates() {
        let deployer = MockDeployer::failing_at(0);
        let mut out = Vec::new();

        let err = Command::Deploy
            .run(&deployer, &context(None), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, ScriptError::ContractDeployment(_)));
        assert!(out.is_empty());
    }
}
