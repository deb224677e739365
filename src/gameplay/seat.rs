use crate::Chips;
use crate::Position;
use crate::cards::Hole;

/// Participation of a seat in the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Not dealt in: empty or unfunded when the hand started.
    Out,
    Betting,
    Folding,
    Shoving,
}

/// One entry of the rules engine's seat table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    position: Position,
    stack: Chips,
    bet: Chips,
    spent: Chips,
    state: State,
    acted: bool,
    hole: Option<Hole>,
}

impl Seat {
    pub fn new(position: Position, stack: Chips) -> Self {
        Self {
            position,
            stack,
            bet: 0,
            spent: 0,
            state: State::Out,
            acted: false,
            hole: None,
        }
    }
    pub fn position(&self) -> Position {
        self.position
    }
    /// Chips behind, not yet committed.
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// Chips committed in the current betting round.
    pub fn bet(&self) -> Chips {
        self.bet
    }
    /// Chips committed over the whole hand.
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn acted(&self) -> bool {
        self.acted
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    /// Still contesting the pot.
    pub fn is_live(&self) -> bool {
        matches!(self.state, State::Betting | State::Shoving)
    }
    /// Holds no chips at all, neither behind nor in the pot.
    pub fn is_broke(&self) -> bool {
        self.stack == 0 && self.spent == 0
    }
}

/// Mutations are reserved for the rules engine.
impl Seat {
    pub(crate) fn deal(&mut self, hole: Hole) {
        self.state = State::Betting;
        self.hole = Some(hole);
        self.bet = 0;
        self.spent = 0;
        self.acted = false;
    }
    pub(crate) fn sit_out(&mut self) {
        self.state = State::Out;
        self.hole = None;
        self.bet = 0;
        self.spent = 0;
        self.acted = false;
    }
    pub(crate) fn commit(&mut self, chips: Chips) -> Chips {
        let chips = chips.min(self.stack);
        self.stack -= chips;
        self.bet += chips;
        self.spent += chips;
        if self.stack == 0 && self.state == State::Betting {
            self.state = State::Shoving;
        }
        chips
    }
    pub(crate) fn fold(&mut self) {
        self.state = State::Folding;
    }
    pub(crate) fn touch(&mut self) {
        self.acted = true;
    }
    pub(crate) fn untouch(&mut self) {
        self.acted = false;
    }
    pub(crate) fn next_round(&mut self) {
        self.bet = 0;
        self.acted = false;
    }
    pub(crate) fn win(&mut self, chips: Chips) {
        self.stack += chips;
    }
    pub(crate) fn settle(&mut self) {
        self.bet = 0;
        self.spent = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_caps_at_stack_and_shoves() {
        let mut seat = Seat::new(0, 100);
        seat.deal(Hole::try_from("AsKs").unwrap());
        assert_eq!(seat.commit(250), 100);
        assert_eq!(seat.stack(), 0);
        assert_eq!(seat.state(), State::Shoving);
        assert!(seat.is_live());
        assert!(!seat.is_broke());
    }

    #[test]
    fn empty_seat_is_broke() {
        let seat = Seat::new(3, 0);
        assert!(seat.is_broke());
        assert!(!seat.is_live());
    }
}
