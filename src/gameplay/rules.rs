use super::*;
use crate::Chips;
use crate::Position;
use crate::cards::Card;
use crate::cards::Hole;

/// The command/query surface of a card-game rules engine.
///
/// The orchestrator treats an implementation as an opaque, synchronous,
/// single-threaded state authority: it owns every chip, card and pot, and
/// is only ever mutated between decisions. Nothing outside this surface is
/// inspected.
pub trait Rules {
    /// Number of physical seats at the table.
    fn seat_count(&self) -> usize;
    /// Seat a player with a starting stack.
    fn sit(&mut self, pos: Position, chips: Chips) -> Result<(), RulesError>;
    /// The full seat table, one entry per physical seat.
    fn seats(&self) -> Vec<Seat>;

    fn start_hand(&mut self) -> Result<(), RulesError>;
    fn is_hand_in_progress(&self) -> bool;
    fn is_betting_round_in_progress(&self) -> bool;
    fn are_betting_rounds_completed(&self) -> bool;

    /// The seat whose decision is awaited, if any.
    fn player_to_act(&self) -> Option<Position>;
    /// Moves offered to the acting seat.
    fn legal_actions(&self) -> Result<LegalActions, RulesError>;
    fn hole_cards(&self, pos: Position) -> Option<Hole>;
    fn apply(&mut self, action: TakenAction) -> Result<(), RulesError>;

    fn end_betting_round(&mut self) -> Result<(), RulesError>;
    fn showdown(&mut self) -> Result<(), RulesError>;

    fn community_cards(&self) -> Vec<Card>;
    fn pots(&self) -> Vec<Pot>;
    /// Seats awarded chips by the most recent showdown.
    fn winners(&self) -> Vec<Position>;
    fn street(&self) -> Street;
}
