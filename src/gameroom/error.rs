use crate::Position;
use crate::config::ConfigError;
use crate::gameplay::RulesError;
use crate::gameplay::Street;

/// Errors that end the game. Provider failures never show up here: they
/// are absorbed by the fallback policy inside the betting loop.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("hand {hand} {round} seat {seat:?}: {detail}")]
    Invariant {
        hand: usize,
        round: Street,
        seat: Option<Position>,
        detail: String,
    },
    #[error("hand {hand} {round} seat {seat:?}: rules engine refused: {source}")]
    Rules {
        hand: usize,
        round: Street,
        seat: Option<Position>,
        source: RulesError,
    },
    #[error("journal: {0}")]
    Journal(#[from] std::io::Error),
}
