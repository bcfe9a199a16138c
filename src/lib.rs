// EKOPIA Forge deployment core
//
// Wallet, network and deployment orchestration for the EKOPIA token forge.
// Rendering is out of scope: the crate exposes state snapshots and an update
// stream that any front end (or the bundled CLI driver) can consume.

pub mod contract;
pub mod error;
pub mod feedback;
pub mod mobile;
pub mod network;
pub mod orchestrator;
pub mod provider;
pub mod session;
pub mod token;

pub use error::DeployError;
pub use feedback::{FeedbackKind, FeedbackState, RecoveryAction};
pub use mobile::PageContext;
pub use network::{ChainConfig, NetworkPolicy, EKOPIA_CHAIN_ID};
pub use orchestrator::{DeployOrchestrator, DeployPhase, ForgeState};
pub use provider::{ProviderError, RpcWalletProvider, WalletProvider};
pub use session::WalletSession;
pub use token::{DeploymentRequest, DeploymentResult, TokenMetadata, TokenParams};
