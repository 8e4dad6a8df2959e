//! Scripts for deploying the Epic NFT contract and minting tokens on it.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifact;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
mod solidity;
pub mod utils;
