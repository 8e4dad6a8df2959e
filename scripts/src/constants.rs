//! Constants used in the deploy & mint scripts

/// The RPC URL of a local development node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The private key of the first default account on a local development node
pub const DEFAULT_PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The directory in which contract compilation artifacts are stored
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts/contracts";

/// The name of the NFT contract to deploy
pub const DEFAULT_CONTRACT_NAME: &str = "MyEpicNFT";

/// The name of the contract method that mints a single NFT
pub const DEFAULT_MINT_FUNCTION: &str = "makeAnEpicNFT";

/// The number of NFTs minted after deploying the contract
pub const DEFAULT_NUM_MINTS: usize = 2;

/// The number of confirmations to wait for on every transaction
pub const DEFAULT_NUM_CONFIRMATIONS: u64 = 1;

/// The file extension of Solidity sources, used as the artifact subdirectory
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The file extension of a compilation artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The deployments key in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The length in bytes of a function selector
pub const SELECTOR_LEN: usize = 4;
