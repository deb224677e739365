use super::action::ActionKind;
use super::legal::LegalError;
use crate::Chips;
use crate::Position;

/// Rejections raised by a rules engine.
///
/// The orchestrator only submits validated actions, so any of these
/// reaching it indicates a broken engine or a broken roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("seat {0} is out of range")]
    NoSuchSeat(Position),
    #[error("seat {0} is already occupied")]
    Occupied(Position),
    #[error("fewer than two funded seats")]
    NotEnoughPlayers,
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("no hand in progress")]
    NoHand,
    #[error("no seat is waiting to act")]
    NobodyToAct,
    #[error("betting round still in progress")]
    RoundInProgress,
    #[error("betting rounds not yet completed")]
    RoundsIncomplete,
    #[error("{0} is not legal here")]
    Illegal(ActionKind),
    #[error("{action} of {chips} outside {min}..={max}")]
    OutOfRange {
        action: ActionKind,
        chips: Chips,
        min: Chips,
        max: Chips,
    },
    #[error("{0} requires a bet size")]
    Unsized(ActionKind),
    #[error("deck exhausted")]
    DeckExhausted,
    #[error("inconsistent offer: {0}")]
    Offer(#[from] LegalError),
}
