// Deployment orchestration
//
// The state machine that sequences connect → validate network → build
// transaction → submit → await confirmation, and projects every outcome
// onto the user-facing feedback state. The orchestrator is the sole writer
// of session, feedback and result; the UI layer reads snapshots and relays
// intents back in.

use std::sync::Arc;

use ethers::types::Address;
use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::contract;
use crate::error::DeployError;
use crate::feedback::{self, FeedbackState};
use crate::mobile::{self, PageContext};
use crate::network::NetworkPolicy;
use crate::provider::{ProviderError, WalletProvider};
use crate::session::WalletSession;
use crate::token::{DeploymentRequest, DeploymentResult};

/// Phases of the deployment state machine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum DeployPhase {
    #[default]
    Idle,
    Connecting,
    Connected,
    Deploying,
    Confirming,
    Deployed,
    Error,
}

/// Snapshot of everything a front end renders. Replaced wholesale on every
/// transition, never partially mutated by readers.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ForgeState {
    pub phase: DeployPhase,
    pub busy: bool,
    pub session: WalletSession,
    pub feedback: Option<FeedbackState>,
    pub deployed: Option<DeploymentResult>,
}

pub struct DeployOrchestrator {
    provider: Option<Arc<dyn WalletProvider>>,
    policy: NetworkPolicy,
    page: PageContext,
    state: ForgeState,
    subscribers: Vec<UnboundedSender<ForgeState>>,
}

impl DeployOrchestrator {
    /// Create an orchestrator over a detected provider (or its absence), a
    /// network policy, and the ambient page facts.
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        policy: NetworkPolicy,
        page: PageContext,
    ) -> Self {
        Self {
            provider,
            policy,
            page,
            state: ForgeState::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ForgeState {
        &self.state
    }

    pub fn policy(&self) -> &NetworkPolicy {
        &self.policy
    }

    /// Subscribe to state snapshots. Every transition pushes a fresh
    /// snapshot; dead receivers are pruned on the next send.
    pub fn subscribe(&mut self) -> UnboundedReceiver<ForgeState> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Whether the session is on the target network. Used for affordance
    /// styling; a mismatch warns but does not block deployment.
    pub fn on_target_network(&self) -> bool {
        self.state
            .session
            .chain_id()
            .map(|chain_id| self.policy.is_target_network(chain_id))
            .unwrap_or(false)
    }

    pub fn ready_to_deploy(&self) -> bool {
        self.state.session.connected() && self.on_target_network()
    }

    /// Passive reconnection against an already-authorized provider. Never
    /// prompts and never surfaces feedback; failures are only logged.
    pub async fn check_connection(&mut self) {
        let Some(provider) = self.provider.clone() else {
            return;
        };
        match probe_authorized(provider.as_ref()).await {
            Ok(Some((address, chain_id))) => {
                debug!("reusing authorized session for {address:?} on chain {chain_id}");
                self.state.session.establish(address, chain_id);
                self.state.phase = DeployPhase::Connected;
                self.emit();
            }
            Ok(None) => {}
            Err(err) => warn!("auto-connect failed: {err}"),
        }
    }

    /// Connect to the wallet, populating the session on success. With no
    /// provider present, mobile agents get the deep-link recovery path and
    /// desktop agents an install instruction.
    pub async fn connect(&mut self) -> Result<(), DeployError> {
        if self.state.busy {
            return Err(DeployError::Busy);
        }
        let Some(provider) = self.provider.clone() else {
            let err = if mobile::is_mobile_user_agent(&self.page.user_agent) {
                DeployError::NoProviderMobile
            } else {
                DeployError::NoProviderDesktop
            };
            self.state.feedback = Some(feedback::connect_failure(&err, &self.page));
            self.emit();
            return Err(err);
        };

        self.state.busy = true;
        self.state.phase = DeployPhase::Connecting;
        self.emit();

        let outcome = establish_session(provider.as_ref()).await;
        self.state.busy = false;
        match outcome {
            Ok((address, chain_id)) => {
                info!("wallet connected: {address:?} on chain {chain_id}");
                self.state.session.establish(address, chain_id);
                self.state.phase = DeployPhase::Connected;
                self.state.feedback = None;
                self.emit();
                Ok(())
            }
            Err(err) => {
                let err = DeployError::from(err);
                self.state.phase = DeployPhase::Error;
                self.state.feedback = Some(feedback::connect_failure(&err, &self.page));
                self.emit();
                Err(err)
            }
        }
    }

    /// Ask the wallet to switch to the target network and refresh the
    /// session's chain id. No automatic retry: on failure the user is told
    /// to add the network manually.
    pub async fn switch_network(&mut self) -> Result<(), DeployError> {
        if self.state.busy {
            return Err(DeployError::Busy);
        }
        let provider = match (&self.provider, self.state.session.connected()) {
            (Some(provider), true) => provider.clone(),
            _ => {
                let err = DeployError::NotConnected;
                self.state.feedback = Some(feedback::deploy_failure(&err));
                self.emit();
                return Err(err);
            }
        };

        self.state.busy = true;
        self.emit();

        let target = self.policy.target_chain_id();
        let outcome = switch_and_refresh(provider.as_ref(), target).await;
        self.state.busy = false;
        match outcome {
            Ok(chain_id) => {
                info!("network switched to chain {chain_id}");
                self.state.session.refresh_chain(chain_id);
                self.emit();
                Ok(())
            }
            Err(err) => {
                let err = DeployError::from(err);
                self.state.feedback = Some(feedback::switch_failure());
                self.emit();
                Err(err)
            }
        }
    }

    /// Run a deployment: validate locally, acquire the signer, submit the
    /// creation transaction and await inclusion. Any prior result is
    /// cleared the moment the attempt starts, before its outcome is known.
    pub async fn deploy(
        &mut self,
        request: DeploymentRequest,
    ) -> Result<DeploymentResult, DeployError> {
        if self.state.busy {
            return Err(DeployError::Busy);
        }
        if !self.state.session.connected() {
            let err = DeployError::NotConnected;
            self.state.feedback = Some(feedback::deploy_failure(&err));
            self.emit();
            return Err(err);
        }
        if !self.on_target_network() {
            // Soft check: warn and proceed, the wallet is the final arbiter
            self.state.feedback = Some(feedback::wrong_network_warning());
            self.emit();
        }

        self.state.busy = true;
        self.state.phase = DeployPhase::Deploying;
        self.state.deployed = None;
        self.state.feedback = Some(feedback::deploy_started());
        self.emit();

        let outcome = self.run_deploy(&request).await;
        self.state.busy = false;
        match outcome {
            Ok(contract_address) => {
                let result = DeploymentResult {
                    contract_address,
                    metadata: request.metadata,
                };
                info!("token deployed at {}", result.checksummed_address());
                self.state.deployed = Some(result.clone());
                self.state.phase = DeployPhase::Deployed;
                self.state.feedback = Some(feedback::deploy_succeeded());
                self.emit();
                Ok(result)
            }
            Err(err) => {
                warn!("deployment failed: {err}");
                self.state.phase = DeployPhase::Error;
                self.state.feedback = Some(feedback::deploy_failure(&err));
                self.emit();
                Err(err)
            }
        }
    }

    async fn run_deploy(&mut self, request: &DeploymentRequest) -> Result<Address, DeployError> {
        // Local sanity floor first: no provider call until the request
        // passes it
        let init_code = contract::deployment_init_code(&request.bytecode, &request.params)?;

        let provider = self.provider.clone().ok_or(DeployError::NotConnected)?;
        let signer = provider.signer_address().await?;
        debug!("deploying {} bytes of init code from {signer:?}", init_code.len());

        let tx_hash = provider.submit_deployment(init_code).await?;
        self.state.phase = DeployPhase::Confirming;
        self.state.feedback = Some(feedback::awaiting_confirmation());
        self.emit();

        let address = provider.await_deployment(tx_hash).await?;
        Ok(address)
    }

    fn emit(&mut self) {
        let snapshot = self.state.clone();
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
    }
}

async fn probe_authorized(
    provider: &dyn WalletProvider,
) -> Result<Option<(Address, u64)>, ProviderError> {
    let accounts = provider.authorized_accounts().await?;
    let Some(address) = accounts.first().copied() else {
        return Ok(None);
    };
    let chain_id = provider.chain_id().await?;
    Ok(Some((address, chain_id)))
}

async fn establish_session(
    provider: &dyn WalletProvider,
) -> Result<(Address, u64), ProviderError> {
    let accounts = provider.request_accounts().await?;
    let address = accounts
        .first()
        .copied()
        .ok_or_else(|| ProviderError::Other("wallet returned no accounts".to_string()))?;
    let chain_id = provider.chain_id().await?;
    Ok((address, chain_id))
}

async fn switch_and_refresh(
    provider: &dyn WalletProvider,
    target: u64,
) -> Result<u64, ProviderError> {
    provider.switch_chain(target).await?;
    provider.chain_id().await
}
