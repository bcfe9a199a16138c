use ethers::types::Address;
use ethers::utils::to_checksum;
use serde::{Deserialize, Serialize};

/// Constructor parameters of the token contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenParams {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Initial supply as a decimal string, in whole tokens. The contract
    /// constructor scales by 10^18; this value is never pre-multiplied.
    pub initial_supply: String,
}

/// Descriptive fields not stored by the contract itself. Handed back to the
/// user for manual registration in the block explorer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
}

impl TokenMetadata {
    pub fn is_empty(&self) -> bool {
        self.logo_url.is_none()
            && self.website.is_none()
            && self.twitter.is_none()
            && self.telegram.is_none()
    }
}

/// A deployment intent, built fresh from form state at submit time and
/// immutable once handed to the orchestrator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub params: TokenParams,
    /// Contract creation bytecode, hex with or without a `0x` prefix.
    pub bytecode: String,
    pub metadata: TokenMetadata,
}

/// Outcome of a confirmed deployment. Lives until the next deployment
/// attempt starts.
#[derive(Clone, Debug, Serialize)]
pub struct DeploymentResult {
    pub contract_address: Address,
    pub metadata: TokenMetadata,
}

impl DeploymentResult {
    /// EIP-55 checksummed form of the contract address.
    pub fn checksummed_address(&self) -> String {
        to_checksum(&self.contract_address, None)
    }
}
