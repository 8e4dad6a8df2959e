use std::{io, process::ExitCode};

use clap::Parser;
use scripts::{
    artifact::ContractFactory, cli::Cli, commands::ScriptContext, deployer::ChainDeployer,
    errors::ScriptError, utils::setup_client,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Progress lines go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    exit_code(run(cli).await)
}

/// Map the outcome of the script to the process exit code, logging the error on failure
fn exit_code(result: Result<(), ScriptError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts_dir,
        contract_name,
        mint_function,
        confirmations,
        deployments_path,
        command,
    } = cli;

    let factory = ContractFactory::from_artifacts(&artifacts_dir, &contract_name)?;
    let (provider, sender) = setup_client(&priv_key, &rpc_url).await?;
    let deployer = ChainDeployer::new(provider, sender, confirmations);

    let ctx = ScriptContext {
        factory,
        mint_function,
        deployments_path,
    };

    command
        .unwrap_or_default()
        .run(&deployer, &ctx, &mut io::stdout().lock())
        .await
}
