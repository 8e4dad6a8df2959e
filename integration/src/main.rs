//! Integration tests for the deploy & mint scripts, run against a local dev node

use std::path::PathBuf;

use alloy::node_bindings::Anvil;
use clap::Parser;
use eyre::Result;
use scripts::{
    artifact::ContractFactory, commands::ScriptContext, constants::DEFAULT_PKEY,
    deployer::ChainDeployer, utils::setup_client,
};
use tracing::info;


/// The CLI arguments for the integration tests
#[derive(Debug, Clone, Parser)]
struct CliArgs {
    /// Path to the compiled NFT contract artifact
    #[clap(long, default_value = "../artifacts/contracts/MyEpicNFT.sol/MyEpicNFT.json")]
    artifact: PathBuf,
    /// The RPC url to run the tests against, a fresh Anvil node is spawned when omitted
    #[clap(short = 'r', long)]
    rpc_url: Option<String>,
    /// The private key to use for testing
    #[clap(short = 'p', long, default_value = DEFAULT_PKEY)]
    pkey: String,
    /// The name of the contract method that mints one token
    #[clap(long, default_value = "makeAnEpicNFT")]
    mint_function: String,
}

/// The state shared by every test
pub(crate) struct TestContext {
    /// The deployer sending transactions to the node
    pub deployer: ChainDeployer,
    /// The script settings
    pub script: ScriptContext,
}

// --------------
// | Entrypoint |
// --------------

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().pretty().init();
    let args = CliArgs::parse();

    // Held until the tests finish, the node is killed on drop
    let mut _anvil = None;
    let rpc_url = match args.rpc_url {
        Some(url) => url,
        None => {
            let node = Anvil::new().try_spawn()?;
            let url = node.endpoint();
            info!("Spawned Anvil node at {url}");
            _anvil = Some(node);
            url
        }
    };

    let (provider, sender) = setup_client(&args.pkey, &rpc_url).await?;
    let ctx = TestContext {
        deployer: ChainDeployer::new(provider, sender, 1 /* confirmations */),
        script: ScriptContext {
            factory: ContractFactory::from_artifact_file(&args.artifact)?,
            mint_function: args.mint_function,
            deployments_path: None,
        },
    };

    tests::run_all(&ctx).await
}
