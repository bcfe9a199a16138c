// Feedback projection
//
// Pure mapping from orchestrator outcomes onto the single user-facing
// feedback state. Exactly one FeedbackState is visible at a time; later
// states always replace earlier ones. Info carries both progress narration
// and soft warnings on the same channel.

use serde::Serialize;

use crate::error::DeployError;
use crate::mobile::{self, PageContext};

// User-facing copy, verbatim from the deployer UI.
pub const NO_WALLET_MOBILE: &str = "No se detectó la wallet. Si estás usando Chrome o Safari en tu móvil, la web no puede acceder a MetaMask directamente.";
pub const OPEN_IN_METAMASK: &str = "Abrir en App de MetaMask";
pub const METAMASK_NOT_INSTALLED: &str =
    "MetaMask no está instalado. Por favor instálalo en tu navegador.";
pub const CONNECT_FALLBACK: &str = "Error al conectar.";
pub const CONNECT_FIRST: &str = "Conecta tu wallet primero.";
pub const WRONG_NETWORK_WARNING: &str = "Advertencia: No estás en la red EKOPIA (2025).";
pub const DEPLOY_STARTED: &str = "Iniciando despliegue... Por favor confirma en tu wallet.";
pub const AWAITING_CONFIRMATION: &str = "Transacción enviada. Esperando confirmación...";
pub const DEPLOY_SUCCEEDED: &str = "¡Token desplegado exitosamente!";
pub const SWITCH_FAILED: &str =
    "No se pudo cambiar a la red EKOPIA (Chain ID 2025). Agrégala manualmente a MetaMask.";
pub const INVALID_BYTECODE: &str = "El Bytecode parece inválido o vacío.";
pub const INVALID_ARGUMENTS: &str =
    "Error en los argumentos: Revisa que el Bytecode sea correcto y corresponda al ABI.";
pub const DEPLOY_FALLBACK: &str = "Error desconocido al desplegar.";
pub const OPERATION_IN_FLIGHT: &str = "Espera a que termine la operación en curso.";

/// Visual/semantic channel of a feedback message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
    Info,
}

/// User-initiated recovery affordance attached to a feedback message.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RecoveryAction {
    pub label: String,
    pub url: String,
}

/// The one live user-facing status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FeedbackState {
    pub kind: FeedbackKind,
    pub message: String,
    pub action: Option<RecoveryAction>,
}

impl FeedbackState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
            action: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
            action: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Info,
            message: message.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.action = Some(RecoveryAction {
            label: label.into(),
            url: url.into(),
        });
        self
    }
}

pub fn wrong_network_warning() -> FeedbackState {
    FeedbackState::info(WRONG_NETWORK_WARNING)
}

pub fn deploy_started() -> FeedbackState {
    FeedbackState::info(DEPLOY_STARTED)
}

pub fn awaiting_confirmation() -> FeedbackState {
    FeedbackState::info(AWAITING_CONFIRMATION)
}

pub fn deploy_succeeded() -> FeedbackState {
    FeedbackState::success(DEPLOY_SUCCEEDED)
}

pub fn switch_failure() -> FeedbackState {
    FeedbackState::error(SWITCH_FAILED)
}

/// Project a connect failure. The mobile no-provider case carries the
/// deep-link recovery action; the desktop case carries none.
pub fn connect_failure(err: &DeployError, page: &PageContext) -> FeedbackState {
    match err {
        DeployError::NoProviderMobile => FeedbackState::error(NO_WALLET_MOBILE)
            .with_action(OPEN_IN_METAMASK, mobile::metamask_deep_link(page)),
        DeployError::NoProviderDesktop => FeedbackState::error(METAMASK_NOT_INSTALLED),
        DeployError::UserRejected(message) | DeployError::Provider(message) => {
            FeedbackState::error(or_fallback(message, CONNECT_FALLBACK))
        }
        _ => FeedbackState::error(CONNECT_FALLBACK),
    }
}

/// Project a deploy failure onto its user-facing message.
pub fn deploy_failure(err: &DeployError) -> FeedbackState {
    match err {
        DeployError::NotConnected => FeedbackState::error(CONNECT_FIRST),
        DeployError::InvalidBytecode => FeedbackState::error(INVALID_BYTECODE),
        DeployError::InvalidArgument(_) => FeedbackState::error(INVALID_ARGUMENTS),
        DeployError::SwitchRejectedOrUnsupported(_) => FeedbackState::error(SWITCH_FAILED),
        DeployError::Busy => FeedbackState::error(OPERATION_IN_FLIGHT),
        DeployError::NoProviderMobile | DeployError::NoProviderDesktop => {
            FeedbackState::error(METAMASK_NOT_INSTALLED)
        }
        DeployError::UserRejected(message) | DeployError::Provider(message) => {
            FeedbackState::error(or_fallback(message, DEPLOY_FALLBACK))
        }
    }
}

fn or_fallback(message: &str, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}
