use ethers::types::Address;
use ethers::utils::to_checksum;
use serde::Serialize;

/// Wallet session state.
///
/// Address and chain id are only ever set together, so a connected session
/// can never be observed with one and not the other. The session is cleared
/// only by process teardown; there is no explicit disconnect flow.
#[derive(Clone, Debug, Default, Serialize)]
pub struct WalletSession {
    address: Option<Address>,
    chain_id: Option<u64>,
}

impl WalletSession {
    /// Populate the session from a successful connect.
    pub fn establish(&mut self, address: Address, chain_id: u64) {
        self.address = Some(address);
        self.chain_id = Some(chain_id);
    }

    /// Update the active chain after a network switch. Ignored when no
    /// session is established.
    pub fn refresh_chain(&mut self, chain_id: u64) {
        if self.address.is_some() {
            self.chain_id = Some(chain_id);
        }
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    pub fn connected(&self) -> bool {
        self.address.is_some() && self.chain_id.is_some()
    }

    /// Short display form of the connected address, `0x1234...abcd`.
    pub fn short_address(&self) -> Option<String> {
        self.address.map(|address| {
            let full = to_checksum(&address, None);
            format!("{}...{}", &full[..6], &full[full.len() - 4..])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_is_not_connected() {
        let session = WalletSession::default();
        assert!(!session.connected());
        assert!(session.address().is_none());
        assert!(session.chain_id().is_none());
    }

    #[test]
    fn test_establish_populates_both_fields() {
        let mut session = WalletSession::default();
        session.establish(Address::repeat_byte(1), 2025);
        assert!(session.connected());
        assert_eq!(session.chain_id(), Some(2025));
    }

    #[test]
    fn test_refresh_chain_requires_a_session() {
        let mut session = WalletSession::default();
        session.refresh_chain(2025);
        assert!(!session.connected());
        assert!(session.chain_id().is_none());

        session.establish(Address::repeat_byte(1), 1);
        session.refresh_chain(2025);
        assert_eq!(session.chain_id(), Some(2025));
    }

    #[test]
    fn test_short_address_form() {
        let mut session = WalletSession::default();
        session.establish(Address::repeat_byte(0xab), 2025);
        let short = session.short_address().unwrap();
        assert!(short.starts_with("0x"));
        assert_eq!(short.len(), 6 + 3 + 4);
    }
}
