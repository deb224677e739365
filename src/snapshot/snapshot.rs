use super::*;
use crate::Position;
use crate::cards::Card;
use crate::gameplay::LegalActions;
use crate::gameplay::Rules;
use crate::gameplay::Street;
use crate::gameroom::Roster;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("seat {0} has no rostered player")]
    Unrostered(Position),
    #[error("seat {0} holds no hole cards")]
    NoHoleCards(Position),
}

/// Everything one player may see when asked for one decision.
///
/// Built fresh for every decision from the engine and the roster, never
/// mutated afterwards and never reused for another decision. Building is
/// read-only: the same engine state and roster always yield an equal
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    player: String,
    seat: Position,
    hole_cards: Vec<Card>,
    community_cards: Vec<Card>,
    pots: Vec<PotView>,
    legal_actions: LegalActions,
    round: Street,
    seats: Vec<SeatView>,
}

impl Snapshot {
    pub fn build<R>(
        rules: &R,
        roster: &Roster,
        pos: Position,
        legal: LegalActions,
    ) -> Result<Self, SnapshotError>
    where
        R: Rules,
    {
        let player = roster.name(pos).ok_or(SnapshotError::Unrostered(pos))?;
        let hole = rules.hole_cards(pos).ok_or(SnapshotError::NoHoleCards(pos))?;
        Ok(Self {
            player: player.to_string(),
            seat: pos,
            hole_cards: hole.cards().to_vec(),
            community_cards: rules.community_cards(),
            pots: PotView::translate(&rules.pots(), roster),
            legal_actions: legal,
            round: rules.street(),
            seats: SeatView::table(rules, roster),
        })
    }
    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }
    pub fn pots(&self) -> &[PotView] {
        &self.pots
    }
    pub fn legal_actions(&self) -> &LegalActions {
        &self.legal_actions
    }
    pub fn round(&self) -> Street {
        self.round
    }
    pub fn seats(&self) -> &[SeatView] {
        &self.seats
    }
}
