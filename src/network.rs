// Network policy
//
// Defines the single target network and the comparison rules used to gate
// the deploy affordance and the switch-network request. The check is soft:
// a wrong network warns, it does not block; the wallet makes the final call
// at submission time.

use ethers::types::Address;
use ethers::utils::to_checksum;
use serde::{Deserialize, Serialize};

/// Chain identifier of the EKOPIA network.
pub const EKOPIA_CHAIN_ID: u64 = 2025;

/// Chain configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Chain ID
    pub chain_id: u64,

    /// Chain name
    pub name: String,

    /// Native currency symbol
    pub currency_symbol: String,

    /// Block explorer base URL
    pub explorer_url: String,
}

impl ChainConfig {
    /// Create a new chain configuration
    pub fn new(
        chain_id: u64,
        name: String,
        currency_symbol: String,
        explorer_url: String,
    ) -> Self {
        Self {
            chain_id,
            name,
            currency_symbol,
            explorer_url,
        }
    }

    /// Get the EKOPIA Mainnet configuration
    pub fn ekopia() -> Self {
        Self::new(
            EKOPIA_CHAIN_ID,
            "EKOPIA Mainnet".to_string(),
            "EKO".to_string(),
            "https://explorer.ekopia.space".to_string(),
        )
    }
}

/// Comparison rules against the single accepted target chain.
#[derive(Clone, Debug)]
pub struct NetworkPolicy {
    target: ChainConfig,
}

impl NetworkPolicy {
    pub fn new(target: ChainConfig) -> Self {
        Self { target }
    }

    /// Policy targeting the EKOPIA network.
    pub fn ekopia() -> Self {
        Self::new(ChainConfig::ekopia())
    }

    pub fn target(&self) -> &ChainConfig {
        &self.target
    }

    pub fn target_chain_id(&self) -> u64 {
        self.target.chain_id
    }

    /// Whether `chain_id` is the accepted target network.
    pub fn is_target_network(&self, chain_id: u64) -> bool {
        chain_id == self.target.chain_id
    }

    /// Target chain id in the hex form wallet switch requests expect.
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.target.chain_id)
    }

    /// Header label for the active network.
    pub fn network_label(&self, chain_id: u64) -> String {
        if self.is_target_network(chain_id) {
            self.target.name.clone()
        } else {
            format!("Chain ID: {chain_id}")
        }
    }

    /// Block explorer URL for an address on the target chain.
    pub fn explorer_address_url(&self, address: &Address) -> String {
        format!(
            "{}/address/{}",
            self.target.explorer_url,
            to_checksum(address, None)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_network_comparison() {
        let policy = NetworkPolicy::ekopia();
        assert!(policy.is_target_network(2025));
        assert!(!policy.is_target_network(1));
        assert!(!policy.is_target_network(0));
    }

    #[test]
    fn test_chain_id_hex_form() {
        // 2025 is 0x7e9 on the wire
        assert_eq!(NetworkPolicy::ekopia().chain_id_hex(), "0x7e9");
    }

    #[test]
    fn test_network_labels() {
        let policy = NetworkPolicy::ekopia();
        assert_eq!(policy.network_label(2025), "EKOPIA Mainnet");
        assert_eq!(policy.network_label(1), "Chain ID: 1");
    }

    #[test]
    fn test_explorer_address_url() {
        let policy = NetworkPolicy::ekopia();
        let url = policy.explorer_address_url(&Address::zero());
        assert!(url.starts_with("https://explorer.ekopia.space/address/0x"));
    }
}
