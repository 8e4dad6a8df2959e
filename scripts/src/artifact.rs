//! Contract factories loaded from Solidity compilation artifacts
//!
//! Artifacts follow the layout emitted by Hardhat: the artifact for a contract
//! `Name` lives at `<artifacts-dir>/Name.sol/Name.json` and carries the
//! contract name, its JSON ABI and its creation bytecode.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{ARTIFACT_EXTENSION, SOLIDITY_EXTENSION},
    errors::ScriptError,
};

/// The subset of a compilation artifact needed to deploy and call a contract
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    /// The name of the compiled contract
    contract_name: String,
    /// The contract's ABI
    abi: JsonAbi,
    /// The contract's creation bytecode
    bytecode: Bytes,
}

/// A handle used to deploy new instances of a single contract type
#[derive(Clone, Debug)]
pub struct ContractFactory {
    /// The name of the contract
    name: String,
    /// The contract's ABI
    abi: JsonAbi,
    /// The contract's creation bytecode
    bytecode: Bytes,
}

impl ContractFactory {
    /// Look up the artifact for `name` in the given artifacts directory and
    /// construct a factory from it
    pub fn from_artifacts(artifacts_dir: &Path, name: &str) -> Result<Self, ScriptError> {
        let path = artifact_path(artifacts_dir, name);
        let factory = Self::from_artifact_file(&path)?;

        if factory.name != name {
            return Err(ScriptError::ArtifactParsing(format!(
                "artifact at {} is for contract `{}`, expected `{}`",
                path.display(),
                factory.name,
                name
            )));
        }

        Ok(factory)
    }

    /// Construct a factory from a single artifact file
    pub fn from_artifact_file(path: &Path) -> Result<Self, ScriptError> {
        debug!("Reading artifact from {}", path.display());
        let contents = fs::read_to_string(path)
            .map_err(|e| ScriptError::ReadArtifact(format!("{}: {}", path.display(), e)))?;

        Self::from_artifact_json(&contents)
    }

    /// Construct a factory from the JSON contents of an artifact
    pub fn from_artifact_json(json: &str) -> Result<Self, ScriptError> {
        let Artifact {
            contract_name,
            abi,
            bytecode,
        } = serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        // Interfaces and abstract contracts compile to empty bytecode
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "contract `{}` is abstract and can't be deployed",
                contract_name
            )));
        }

        Ok(Self {
            name: contract_name,
            abi,
            bytecode,
        })
    }

    /// The name of the contract this factory deploys
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contract's ABI
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// The creation bytecode sent in a deployment transaction
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Build the calldata for a call to the given zero-argument function
    pub fn mint_calldata(&self, function: &str) -> Result<Bytes, ScriptError> {
        let overloads = self.abi.function(function).ok_or_else(|| {
            ScriptError::CalldataConstruction(format!(
                "contract `{}` has no function `{}`",
                self.name, function
            ))
        })?;

        let func = overloads
            .iter()
            .find(|f| f.inputs.is_empty())
            .ok_or_else(|| {
                ScriptError::CalldataConstruction(format!(
                    "function `{}` of `{}` takes arguments",
                    function, self.name
                ))
            })?;

        Ok(Bytes::copy_from_slice(func.selector().as_slice()))
    }
}

/// The path of the artifact for `name` within the artifacts directory
pub fn artifact_path(artifacts_dir: &Path, name: &str) -> PathBuf {
    artifacts_dir
        .join(format!("{name}.{SOLIDITY_EXTENSION}"))
        .join(format!("{name}.{ARTIFACT_EXTENSION}"))
}
