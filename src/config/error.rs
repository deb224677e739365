use crate::Chips;
use crate::Position;
use crate::decision::DecisionError;
use crate::prompt::TemplateError;
use std::path::PathBuf;

/// Problems with the table or roster. All of them are fatal and are
/// reported before the first hand is dealt.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("at least two players are required, got {0}")]
    TooFewPlayers(usize),
    #[error("{players} players cannot fit at a {seats}-seat table")]
    TooManyPlayers { players: usize, seats: usize },
    #[error("seat {seat} does not exist at a {seats}-seat table")]
    SeatOutOfRange { seat: Position, seats: usize },
    #[error("seat {0} is assigned twice")]
    DuplicateSeat(Position),
    #[error("player name {0:?} is used twice")]
    DuplicateName(String),
    #[error("starting stack must be positive")]
    ZeroStack,
    #[error("blinds {small}/{big} are invalid")]
    Blinds { small: Chips, big: Chips },
    #[error("{0} sets both template and template_path")]
    TemplateConflict(String),
    #[error("template for {player}: {source}")]
    Template {
        player: String,
        source: TemplateError,
    },
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed roster: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("environment variable {0} is not set")]
    MissingKey(String),
    #[error("provider for {player}: {source}")]
    Provider {
        player: String,
        source: DecisionError,
    },
}
