//! Definitions of the Solidity interface of the NFT contract

use alloy::sol;

sol! {
    interface IMyEpicNFT {
        function makeAnEpicNFT() external;

        #[derive(Debug, PartialEq, Eq)]
        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
    }
}
