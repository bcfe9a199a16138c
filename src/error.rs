use thiserror::Error;

use crate::provider::ProviderError;

/// Failure taxonomy of the deployment orchestrator.
///
/// Every failure is caught at the orchestrator boundary and projected onto a
/// user-facing feedback state; none of these kinds is fatal to the process
/// and all recovery is user-initiated.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DeployError {
    /// No wallet provider and the user agent is a mobile browser. Recoverable
    /// through the wallet-app deep link.
    #[error("no wallet provider detected in a mobile browser")]
    NoProviderMobile,

    /// No wallet provider on a desktop browser. The user must install the
    /// wallet extension.
    #[error("no wallet provider detected")]
    NoProviderDesktop,

    /// An operation requiring an established session was invoked without one.
    #[error("wallet is not connected")]
    NotConnected,

    /// Another wallet operation is already in flight.
    #[error("another wallet operation is already in flight")]
    Busy,

    /// The bytecode failed the local length/format sanity floor.
    #[error("bytecode failed the length/format sanity check")]
    InvalidBytecode,

    /// The user declined a wallet prompt. Fully recoverable.
    #[error("user rejected the wallet request: {0}")]
    UserRejected(String),

    /// Constructor arguments do not match the contract interface.
    #[error("constructor arguments do not match the contract interface: {0}")]
    InvalidArgument(String),

    /// The wallet refused the network switch, or the chain is not registered.
    #[error("network switch rejected or chain not registered: {0}")]
    SwitchRejectedOrUnsupported(String),

    /// Any other provider or transaction-layer failure, carrying whatever
    /// diagnostic the provider supplied.
    #[error("provider error: {0}")]
    Provider(String),
}

impl From<ProviderError> for DeployError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UserRejected(message) => DeployError::UserRejected(message),
            ProviderError::SwitchRejected(message) => {
                DeployError::SwitchRejectedOrUnsupported(message)
            }
            ProviderError::InvalidArgument(message) => DeployError::InvalidArgument(message),
            other => DeployError::Provider(other.to_string()),
        }
    }
}
