// Wallet provider boundary
//
// The wallet is treated as an opaque capability, not reimplemented. This
// trait is the entire surface the orchestrator consumes, which lets it run
// against a scripted fake in tests instead of a real wallet. Every
// interactive call may open a provider-native UI the orchestrator does not
// control and must await.

use async_trait::async_trait;
use ethers::types::{Address, Bytes, TxHash};
use thiserror::Error;

pub mod rpc;

pub use rpc::RpcWalletProvider;

/// Adapter-level failure kinds.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The human declined a wallet prompt.
    #[error("user rejected the wallet request: {0}")]
    UserRejected(String),

    /// The wallet refused to switch networks, or the chain is not
    /// registered in it. No auto-registration is attempted.
    #[error("network switch rejected or chain not registered: {0}")]
    SwitchRejected(String),

    /// Transaction payload does not match the contract interface.
    #[error("constructor arguments do not match the contract interface: {0}")]
    InvalidArgument(String),

    /// The transaction left the mempool without being included.
    #[error("transaction dropped before inclusion")]
    Dropped,

    #[error("{0}")]
    Other(String),
}

/// Capability surface of a wallet provider.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Accounts the wallet has already authorized for this origin. Never
    /// prompts.
    async fn authorized_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Ask the wallet for account access. May open a prompt.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Chain id of the wallet's active network.
    async fn chain_id(&self) -> Result<u64, ProviderError>;

    /// Ask the wallet to switch its active network to `chain_id`.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError>;

    /// Address of the signer that will carry the deployment transaction.
    async fn signer_address(&self) -> Result<Address, ProviderError>;

    /// Submit a contract-creation transaction carrying `init_code`. May
    /// open a confirmation prompt; resolves once the transaction is in the
    /// mempool.
    async fn submit_deployment(&self, init_code: Bytes) -> Result<TxHash, ProviderError>;

    /// Wait for on-chain inclusion of a deployment transaction and return
    /// the created contract's address. No timeout: a stalled confirmation
    /// suspends until the underlying network gives up.
    async fn await_deployment(&self, tx_hash: TxHash) -> Result<Address, ProviderError>;
}
