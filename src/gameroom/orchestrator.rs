use super::*;
use crate::Position;
use crate::config::ConfigError;
use crate::config::TableConfig;
use crate::decision::Request;
use crate::decision::Schema;
use crate::decision::decide;
use crate::decision::fallback;
use crate::gameplay::Rules;
use crate::gameplay::RulesError;
use crate::journal::Event;
use crate::journal::Journal;
use crate::prompt::Renderer;
use crate::snapshot::PotView;
use crate::snapshot::SeatView;
use crate::snapshot::Snapshot;
use std::io::Write;

/// Drives a game from the first deal to a single funded seat.
///
/// The orchestrator owns the rules engine, the roster and the journal.
/// It is the only thing that mutates the engine, and only between
/// decisions: every turn builds a snapshot, renders a prompt, awaits one
/// provider call, validates the answer (or substitutes the fallback),
/// applies exactly one action and journals it.
///
/// Game → hand → betting round, each level observed through the engine:
/// - a game keeps dealing while more than one seat holds chips
/// - a hand keeps running rounds while the engine says it is in progress
/// - a round keeps asking the acting seat while betting is open
///
/// Provider failures never leave the betting loop. Configuration problems,
/// engine refusals and journal I/O errors end the game.
pub struct Orchestrator<R, W>
where
    R: Rules,
    W: Write,
{
    rules: R,
    roster: Roster,
    journal: Journal<W>,
    config: TableConfig,
    hand: usize,
    started: bool,
}

impl<R, W> Orchestrator<R, W>
where
    R: Rules,
    W: Write,
{
    /// Check the table against the roster and seat every player with the
    /// starting stack.
    pub fn new(
        mut rules: R,
        roster: Roster,
        journal: Journal<W>,
        config: TableConfig,
    ) -> Result<Self, FatalError> {
        config.validate()?;
        let seats = rules.seat_count();
        if roster.len() > seats {
            return Err(ConfigError::TooManyPlayers {
                players: roster.len(),
                seats,
            }
            .into());
        }
        if let Some(player) = roster.iter().find(|p| p.seat() >= seats) {
            return Err(ConfigError::SeatOutOfRange {
                seat: player.seat(),
                seats,
            }
            .into());
        }
        for player in roster.iter() {
            rules
                .sit(player.seat(), config.stack)
                .map_err(|source| FatalError::Rules {
                    hand: 0,
                    round: rules.street(),
                    seat: Some(player.seat()),
                    source,
                })?;
        }
        log::info!(
            "[orchestrator] {} players seated at {} seats with {} chips",
            roster.len(),
            seats,
            config.stack
        );
        Ok(Self {
            rules,
            roster,
            journal,
            config,
            hand: 0,
            started: false,
        })
    }

    /// Play hands until one seat holds every chip (or the hand limit is
    /// reached).
    pub async fn run(&mut self) -> Result<Outcome, FatalError> {
        if !self.started {
            self.started = true;
            self.record(Event::GameStart {
                seats: SeatView::table(&self.rules, &self.roster),
                small_blind: self.config.small_blind,
                big_blind: self.config.big_blind,
            })?;
        }
        loop {
            let funded = self.funded();
            match funded.as_slice() {
                [] => return Err(self.invariant(None, "no seat holds any chips")),
                [seat] => return self.finish(*seat),
                _ if self.config.max_hands.is_some_and(|n| self.hand >= n) => {
                    log::info!("[orchestrator] stopping after {} hands", self.hand);
                    return Ok(Outcome::Halted { hands: self.hand });
                }
                _ => self.play_hand().await?,
            }
        }
    }

    /// Play one complete hand: deal, every betting round, showdown.
    pub async fn play_hand(&mut self) -> Result<(), FatalError> {
        self.hand += 1;
        self.rules.start_hand().map_err(|e| self.refusal(None, e))?;
        log::info!("[orchestrator] hand {} begins", self.hand);
        self.record(Event::HandStart {
            hand: self.hand,
            seats: SeatView::table(&self.rules, &self.roster),
        })?;
        let mut turns = 0;
        while self.rules.is_hand_in_progress() {
            while self.rules.is_betting_round_in_progress() {
                turns += 1;
                if turns > crate::MAX_TURNS_PER_HAND {
                    let detail = format!("hand exceeded {} turns", crate::MAX_TURNS_PER_HAND);
                    return Err(self.invariant(self.rules.player_to_act(), detail));
                }
                self.take_turn().await?;
            }
            self.close_round()?;
        }
        self.record(Event::HandEnd {
            hand: self.hand,
            seats: SeatView::table(&self.rules, &self.roster),
        })?;
        log::info!("[orchestrator] hand {} ends", self.hand);
        Ok(())
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn journal(&self) -> &Journal<W> {
        &self.journal
    }
    pub fn hands(&self) -> usize {
        self.hand
    }
    pub fn into_parts(self) -> (R, Roster, Journal<W>) {
        (self.rules, self.roster, self.journal)
    }
}

/// turns and rounds
impl<R, W> Orchestrator<R, W>
where
    R: Rules,
    W: Write,
{
    /// Exactly one decision and exactly one engine update for the seat on
    /// the clock.
    async fn take_turn(&mut self) -> Result<(), FatalError> {
        let pos = match self.rules.player_to_act() {
            Some(pos) => pos,
            None => return Err(self.invariant(None, "betting is open but no seat is to act")),
        };
        let legal = self.rules.legal_actions().map_err(|e| self.refusal(Some(pos), e))?;
        let snapshot = Snapshot::build(&self.rules, &self.roster, pos, legal.clone())
            .map_err(|e| self.invariant(Some(pos), e.to_string()))?;
        let timeout = self.config.decision_timeout;
        let player = match self.roster.get_mut(pos) {
            Some(player) => player,
            None => return Err(self.invariant(Some(pos), "acting seat has no player")),
        };
        let request = Request {
            player: player.name().to_string(),
            prompt: player.template().render(&snapshot),
            schema: Schema::from(&legal),
        };
        log::debug!("[orchestrator] {} to act: {}", request.player, legal);
        let decision = decide(player.provider(), &request, &legal, timeout).await;
        let action = match decision {
            Ok(action) => action,
            Err(error) => {
                let action = fallback(&legal);
                log::warn!(
                    "[orchestrator] {} {} failure, substituting {}: {}",
                    request.player,
                    error.kind(),
                    action,
                    error
                );
                self.record(Event::DecisionFailure {
                    hand: self.hand,
                    round: snapshot.round(),
                    player: request.player.clone(),
                    kind: error.kind(),
                    detail: error.to_string(),
                })?;
                action
            }
        };
        self.rules
            .apply(action)
            .map_err(|e| self.refusal(Some(pos), e))?;
        log::info!("[orchestrator] {} {}", request.player, action);
        self.record(Event::PlayerAction {
            hand: self.hand,
            round: snapshot.round(),
            player: request.player,
            hole_cards: snapshot.hole_cards().to_vec(),
            action: action.action(),
            bet_size: action.bet_size(),
        })
    }

    /// Close the settled round, and resolve the hand once no rounds remain.
    fn close_round(&mut self) -> Result<(), FatalError> {
        let round = self.rules.street();
        self.rules
            .end_betting_round()
            .map_err(|e| self.refusal(None, e))?;
        self.record(Event::EndBettingRound {
            hand: self.hand,
            round,
            pots: PotView::translate(&self.rules.pots(), &self.roster),
            community_cards: self.rules.community_cards(),
        })?;
        if self.rules.are_betting_rounds_completed() {
            self.rules.showdown().map_err(|e| self.refusal(None, e))?;
            let winners = self
                .rules
                .winners()
                .into_iter()
                .filter_map(|p| self.roster.name(p))
                .map(String::from)
                .collect::<Vec<_>>();
            log::info!("[orchestrator] hand {} won by {}", self.hand, winners.join(", "));
            self.record(Event::Showdown {
                hand: self.hand,
                winners,
            })?;
        }
        Ok(())
    }

    fn finish(&mut self, seat: Position) -> Result<Outcome, FatalError> {
        let name = match self.roster.name(seat) {
            Some(name) => name.to_string(),
            None => return Err(self.invariant(Some(seat), "last funded seat has no player")),
        };
        log::info!("[orchestrator] {} wins after {} hands", name, self.hand);
        self.record(Event::GameEnd {
            hands: self.hand,
            winner: name.clone(),
        })?;
        Ok(Outcome::Winner {
            name,
            seat,
            hands: self.hand,
        })
    }
}

/// bookkeeping
impl<R, W> Orchestrator<R, W>
where
    R: Rules,
    W: Write,
{
    fn funded(&self) -> Vec<Position> {
        self.rules
            .seats()
            .iter()
            .filter(|s| s.stack() > 0)
            .map(|s| s.position())
            .collect()
    }

    fn record(&mut self, event: Event) -> Result<(), FatalError> {
        self.journal.append(&event).map_err(|e| {
            log::error!("[orchestrator] journal write failed: {}", e);
            FatalError::Journal(e)
        })
    }

    fn invariant<S>(&self, seat: Option<Position>, detail: S) -> FatalError
    where
        S: Into<String>,
    {
        let error = FatalError::Invariant {
            hand: self.hand,
            round: self.rules.street(),
            seat,
            detail: detail.into(),
        };
        log::error!("[orchestrator] {}", error);
        error
    }

    fn refusal(&self, seat: Option<Position>, source: RulesError) -> FatalError {
        let error = FatalError::Rules {
            hand: self.hand,
            round: self.rules.street(),
            seat,
            source,
        };
        log::error!("[orchestrator] {}", error);
        error
    }
}
