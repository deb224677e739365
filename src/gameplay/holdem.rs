use super::*;
use crate::Chips;
use crate::Position;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hole;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Between hands.
    Idle,
    /// A betting round is open (it may already be settled).
    Betting,
    /// No further betting this hand; waiting for showdown.
    Complete,
}

/// Reference No-Limit Hold'em table.
///
/// Implements [`Rules`] for 2 or more funded seats: button rotation over
/// funded seats, blinds, min-raise tracking, all-ins and side pots. Bet and
/// raise sizes are "to" amounts, i.e. the total the seat will have put in
/// during the current round once the action is applied.
///
/// Showdown ranking is delegated to a [`Judge`]. The deck is driven by a
/// seeded rng, so a table built from the same seed deals the same cards.
pub struct Holdem {
    seats: Vec<Seat>,
    occupied: Vec<bool>,
    small_blind: Chips,
    big_blind: Chips,
    judge: Box<dyn Judge>,
    rng: SmallRng,
    deck: Deck,
    board: Vec<Card>,
    street: Street,
    phase: Phase,
    dealer: Option<Position>,
    ticker: Option<Position>,
    raise: Chips,
    winners: Vec<Position>,
}

impl Holdem {
    pub fn new(n: usize, small_blind: Chips, big_blind: Chips, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self {
            seats: (0..n).map(|i| Seat::new(i, 0)).collect(),
            occupied: vec![false; n],
            small_blind,
            big_blind,
            judge: Box::new(Evaluator),
            rng,
            deck,
            board: Vec::new(),
            street: Street::Preflop,
            phase: Phase::Idle,
            dealer: None,
            ticker: None,
            raise: big_blind,
            winners: Vec::new(),
        }
    }
    pub fn with_judge<J>(mut self, judge: J) -> Self
    where
        J: Judge + 'static,
    {
        self.judge = Box::new(judge);
        self
    }
    pub fn dealer(&self) -> Option<Position> {
        self.dealer
    }
    pub fn blinds(&self) -> (Chips, Chips) {
        (self.small_blind, self.big_blind)
    }
}

/// seat arithmetic
impl Holdem {
    /// Every other seat, clockwise, starting after `from`.
    fn after(&self, from: Position) -> impl Iterator<Item = Position> + use<> {
        let n = self.seats.len();
        (1..=n).map(move |k| (from + k) % n)
    }
    fn is_funded(&self, pos: Position) -> bool {
        self.occupied[pos] && self.seats[pos].stack() > 0
    }
    fn next_funded(&self, from: Position) -> Option<Position> {
        self.after(from).find(|p| self.is_funded(*p))
    }
    fn next_dealt(&self, from: Position) -> Option<Position> {
        self.after(from).find(|p| self.seats[*p].state() != State::Out)
    }
    fn next_actor(&self, from: Position) -> Option<Position> {
        let stake = self.stake();
        self.after(from).find(|p| {
            let seat = &self.seats[*p];
            seat.state() == State::Betting && (!seat.acted() || seat.bet() < stake)
        })
    }
    fn live(&self) -> usize {
        self.seats.iter().filter(|s| s.is_live()).count()
    }
    fn betting(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .count()
    }
    /// Largest commitment in the current round.
    fn stake(&self) -> Chips {
        self.seats.iter().map(Seat::bet).max().unwrap_or(0)
    }
    /// Everyone who can still act has acted and matched, or the hand is
    /// down to a single live seat.
    fn is_settled(&self) -> bool {
        let stake = self.stake();
        let alone = self.betting() < 2;
        self.live() <= 1
            || self
                .seats
                .iter()
                .filter(|s| s.state() == State::Betting)
                .all(|s| s.bet() >= stake && (s.acted() || alone))
    }
    fn actor(&self) -> Result<Position, RulesError> {
        self.player_to_act().ok_or(RulesError::NobodyToAct)
    }
}

/// hand lifecycle
impl Holdem {
    fn post(&mut self, pos: Position, blind: Chips) {
        let posted = self.seats[pos].commit(blind);
        log::debug!("[holdem] P{} posts {}", pos, posted);
    }
    fn reveal(&mut self, street: Street) -> Result<(), RulesError> {
        let _burn = self.deck.draw().ok_or(RulesError::DeckExhausted)?;
        let cards = self
            .deck
            .deal(street.n_revealed())
            .ok_or(RulesError::DeckExhausted)?;
        self.board.extend(cards);
        log::debug!("[holdem] {} {:?}", street, self.board);
        Ok(())
    }
    fn award(&mut self, pot: &Pot) {
        let contenders = pot
            .eligible
            .iter()
            .filter_map(|p| self.seats[*p].hole().map(|h| (*p, h)))
            .collect::<Vec<(Position, Hole)>>();
        let mut winners = match contenders.len() {
            0 => return,
            1 => vec![contenders[0].0],
            _ => self.judge.best(&contenders, &self.board),
        };
        if winners.is_empty() {
            winners = contenders.iter().map(|(p, _)| *p).collect();
        }
        let dealer = self.dealer.unwrap_or(0);
        let n = self.seats.len();
        winners.sort_by_key(|p| (p + n - dealer - 1) % n);
        let share = pot.size / winners.len() as Chips;
        let odd = pot.size % winners.len() as Chips;
        for (i, p) in winners.iter().enumerate() {
            let chips = share + if (i as Chips) < odd { 1 } else { 0 };
            self.seats[*p].win(chips);
            log::debug!("[holdem] P{} wins {}", p, chips);
        }
        self.winners.extend(winners);
    }
}

impl Rules for Holdem {
    fn seat_count(&self) -> usize {
        self.seats.len()
    }

    fn sit(&mut self, pos: Position, chips: Chips) -> Result<(), RulesError> {
        if self.phase != Phase::Idle {
            return Err(RulesError::HandInProgress);
        }
        match self.occupied.get(pos) {
            None => Err(RulesError::NoSuchSeat(pos)),
            Some(true) => Err(RulesError::Occupied(pos)),
            Some(false) => {
                self.occupied[pos] = true;
                self.seats[pos] = Seat::new(pos, chips);
                Ok(())
            }
        }
    }

    fn seats(&self) -> Vec<Seat> {
        self.seats.clone()
    }

    fn start_hand(&mut self) -> Result<(), RulesError> {
        if self.phase != Phase::Idle {
            return Err(RulesError::HandInProgress);
        }
        let funded = (0..self.seats.len())
            .filter(|p| self.is_funded(*p))
            .collect::<Vec<_>>();
        if funded.len() < 2 {
            return Err(RulesError::NotEnoughPlayers);
        }
        let dealer = self
            .next_funded(self.dealer.unwrap_or(self.seats.len() - 1))
            .ok_or(RulesError::NotEnoughPlayers)?;
        self.dealer = Some(dealer);
        self.deck = Deck::shuffled(&mut self.rng);
        self.board.clear();
        self.winners.clear();
        self.street = Street::Preflop;
        self.raise = self.big_blind;
        for pos in 0..self.seats.len() {
            if funded.contains(&pos) {
                let hole = self.deck.hole().ok_or(RulesError::DeckExhausted)?;
                self.seats[pos].deal(hole);
            } else {
                self.seats[pos].sit_out();
            }
        }
        let sb = match funded.len() {
            2 => dealer,
            _ => self.next_dealt(dealer).ok_or(RulesError::NotEnoughPlayers)?,
        };
        let bb = self.next_dealt(sb).ok_or(RulesError::NotEnoughPlayers)?;
        self.post(sb, self.small_blind);
        self.post(bb, self.big_blind);
        self.phase = Phase::Betting;
        self.ticker = self.next_actor(bb);
        log::debug!(
            "[holdem] hand started: dealer P{} sb P{} bb P{} ({} seats dealt)",
            dealer,
            sb,
            bb,
            funded.len()
        );
        Ok(())
    }

    fn is_hand_in_progress(&self) -> bool {
        self.phase != Phase::Idle
    }

    fn is_betting_round_in_progress(&self) -> bool {
        self.phase == Phase::Betting && !self.is_settled()
    }

    fn are_betting_rounds_completed(&self) -> bool {
        self.phase == Phase::Complete
    }

    fn player_to_act(&self) -> Option<Position> {
        match self.is_betting_round_in_progress() {
            true => self.ticker,
            false => None,
        }
    }

    fn legal_actions(&self) -> Result<LegalActions, RulesError> {
        let seat = &self.seats[self.actor()?];
        let stake = self.stake();
        let to_call = stake - seat.bet();
        let others = self.betting() > 1;
        let mut actions = Vec::new();
        let mut range = None;
        if to_call > 0 {
            actions.push(ActionKind::Fold);
        } else {
            actions.push(ActionKind::Check);
        }
        if to_call > 0 {
            actions.push(ActionKind::Call);
        }
        if seat.stack() > to_call && others {
            let most = seat.bet() + seat.stack();
            let least = match stake {
                0 => self.big_blind,
                _ => stake + self.raise,
            };
            actions.push(match stake {
                0 => ActionKind::Bet,
                _ => ActionKind::Raise,
            });
            range = ChipRange::new(least.min(most), most);
        }
        Ok(LegalActions::new(actions, range)?)
    }

    fn hole_cards(&self, pos: Position) -> Option<Hole> {
        self.seats.get(pos).and_then(Seat::hole)
    }

    fn apply(&mut self, action: TakenAction) -> Result<(), RulesError> {
        let pos = self.actor()?;
        let legal = self.legal_actions()?;
        let kind = action.action();
        if !legal.contains(kind) {
            return Err(RulesError::Illegal(kind));
        }
        let stake = self.stake();
        match kind {
            ActionKind::Fold => self.seats[pos].fold(),
            ActionKind::Check => {}
            ActionKind::Call => {
                let to_call = stake - self.seats[pos].bet();
                self.seats[pos].commit(to_call);
            }
            ActionKind::Bet | ActionKind::Raise => {
                let chips = action.bet_size().ok_or(RulesError::Unsized(kind))?;
                let range = legal.range().ok_or(RulesError::Unsized(kind))?;
                if !range.contains(chips) {
                    return Err(RulesError::OutOfRange {
                        action: kind,
                        chips,
                        min: range.min,
                        max: range.max,
                    });
                }
                let added = chips - self.seats[pos].bet();
                self.seats[pos].commit(added);
                let increment = chips - stake;
                if increment >= self.raise {
                    self.raise = increment;
                    self.seats
                        .iter_mut()
                        .filter(|s| s.position() != pos)
                        .for_each(Seat::untouch);
                }
            }
        }
        self.seats[pos].touch();
        self.ticker = self.next_actor(pos);
        log::debug!("[holdem] P{} {}", pos, action);
        Ok(())
    }

    fn end_betting_round(&mut self) -> Result<(), RulesError> {
        match self.phase {
            Phase::Idle => return Err(RulesError::NoHand),
            Phase::Complete => return Err(RulesError::RoundsIncomplete),
            Phase::Betting if !self.is_settled() => return Err(RulesError::RoundInProgress),
            Phase::Betting => {}
        }
        self.seats.iter_mut().for_each(Seat::next_round);
        self.raise = self.big_blind;
        match self.street.next() {
            Some(next) if self.live() > 1 => {
                self.reveal(next)?;
                self.street = next;
                self.ticker = self.next_actor(self.dealer.unwrap_or(0));
            }
            _ => {
                self.phase = Phase::Complete;
                self.ticker = None;
            }
        }
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), RulesError> {
        if self.phase != Phase::Complete {
            return Err(RulesError::RoundsIncomplete);
        }
        self.winners.clear();
        for pot in self.pots() {
            self.award(&pot);
        }
        self.winners.sort_unstable();
        self.winners.dedup();
        self.seats.iter_mut().for_each(Seat::settle);
        self.phase = Phase::Idle;
        self.ticker = None;
        Ok(())
    }

    fn community_cards(&self) -> Vec<Card> {
        self.board.clone()
    }

    fn pots(&self) -> Vec<Pot> {
        let spent = self.seats.iter().map(Seat::spent).collect::<Vec<_>>();
        let state = self.seats.iter().map(Seat::state).collect::<Vec<_>>();
        Pot::layer(&spent, &state)
    }

    fn winners(&self) -> Vec<Position> {
        self.winners.clone()
    }

    fn street(&self) -> Street {
        self.street
    }
}
