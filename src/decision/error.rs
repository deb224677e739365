use crate::gameplay::ActionKind;
use crate::gameplay::ChipRange;
use std::time::Duration;

/// Ways a well-formed proposal can still be unacceptable for the decision
/// it answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("unknown action {0:?}")]
    Unknown(String),
    #[error("{0} was not offered")]
    Unoffered(ActionKind),
    #[error("{0} requires a bet size")]
    MissingSize(ActionKind),
    #[error("bet size {0} is not a whole number of chips")]
    NotChips(String),
    #[error("bet size {size} outside {range}")]
    OutOfRange { size: i64, range: ChipRange },
}

/// Why a provider produced no usable decision.
///
/// Every variant is recoverable: the orchestrator substitutes a fallback
/// action and records the failure under [`DecisionError::kind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Protocol(String),
    #[error("invalid proposal: {0}")]
    Invalid(#[from] Violation),
    #[error("no decision within {0:?}")]
    Timeout(Duration),
}

/// Journal label for a [`DecisionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Transport,
    Protocol,
    Validation,
    Timeout,
}

impl DecisionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::Protocol(_) => FailureKind::Protocol,
            Self::Invalid(_) => FailureKind::Validation,
            Self::Timeout(_) => FailureKind::Timeout,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Protocol => write!(f, "protocol"),
            Self::Validation => write!(f, "validation"),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}
