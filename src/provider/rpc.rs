// JSON-RPC wallet provider
//
// The Rust-native counterpart of a browser-injected provider: an HTTP
// JSON-RPC endpoint plus a local signing key. Account access needs no
// prompt, and the endpoint is pinned to a single chain, so a switch request
// to any other chain is refused.

use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, PendingTransaction, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Bytes, TransactionRequest, TxHash};
use log::{debug, info};

use super::{ProviderError, WalletProvider};

pub struct RpcWalletProvider {
    client: SignerMiddleware<Provider<Http>, LocalWallet>,
    chain_id: u64,
}

impl RpcWalletProvider {
    /// Connect to an RPC endpoint and bind the signing key to its chain id.
    pub async fn connect(rpc_url: &str, private_key: &str) -> Result<Self, ProviderError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|err| ProviderError::Other(format!("invalid RPC url: {err}")))?;
        let chain_id = provider
            .get_chainid()
            .await
            .map_err(classify_rpc_error)?
            .as_u64();
        let wallet = private_key
            .trim_start_matches("0x")
            .parse::<LocalWallet>()
            .map_err(|err| ProviderError::Other(format!("failed to parse private key: {err}")))?
            .with_chain_id(chain_id);
        info!("connected to chain {chain_id} via {rpc_url}");
        Ok(Self {
            client: SignerMiddleware::new(provider, wallet),
            chain_id,
        })
    }
}

/// A JSON-RPC transport carries no EIP-1193 rejection code, so user
/// rejection is recognized from the diagnostic text.
fn classify_rpc_error(err: impl std::fmt::Display) -> ProviderError {
    let message = err.to_string();
    let lowered = message.to_lowercase();
    if lowered.contains("rejected") || lowered.contains("denied") {
        ProviderError::UserRejected(message)
    } else {
        ProviderError::Other(message)
    }
}

#[async_trait]
impl WalletProvider for RpcWalletProvider {
    async fn authorized_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        // A local key never needs a prompt
        Ok(vec![self.client.signer().address()])
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        Ok(vec![self.client.signer().address()])
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let chain_id = self
            .client
            .get_chainid()
            .await
            .map_err(classify_rpc_error)?;
        Ok(chain_id.as_u64())
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        if chain_id == self.chain_id {
            return Ok(());
        }
        Err(ProviderError::SwitchRejected(format!(
            "endpoint is pinned to chain {}",
            self.chain_id
        )))
    }

    async fn signer_address(&self) -> Result<Address, ProviderError> {
        Ok(self.client.signer().address())
    }

    async fn submit_deployment(&self, init_code: Bytes) -> Result<TxHash, ProviderError> {
        // Contract creation: `to` stays empty
        let tx = TransactionRequest::new().data(init_code);
        let pending = self
            .client
            .send_transaction(tx, None)
            .await
            .map_err(classify_rpc_error)?;
        let tx_hash = *pending;
        debug!("deployment transaction submitted: {tx_hash:?}");
        Ok(tx_hash)
    }

    async fn await_deployment(&self, tx_hash: TxHash) -> Result<Address, ProviderError> {
        let receipt = PendingTransaction::new(tx_hash, self.client.provider())
            .await
            .map_err(classify_rpc_error)?
            .ok_or(ProviderError::Dropped)?;
        receipt
            .contract_address
            .ok_or_else(|| ProviderError::Other("receipt carries no contract address".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_is_recognized_from_diagnostics() {
        let err = classify_rpc_error("MetaMask Tx Signature: User denied transaction signature.");
        assert!(matches!(err, ProviderError::UserRejected(_)));

        let err = classify_rpc_error("transaction rejected by signer");
        assert!(matches!(err, ProviderError::UserRejected(_)));

        let err = classify_rpc_error("nonce too low");
        assert!(matches!(err, ProviderError::Other(_)));
    }
}
