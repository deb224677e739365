use crate::Chips;
use crate::cards::Card;
use crate::decision::FailureKind;
use crate::gameplay::ActionKind;
use crate::gameplay::Street;
use crate::snapshot::PotView;
use crate::snapshot::SeatView;

/// One record of the game trace. Hands are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    GameStart {
        seats: Vec<SeatView>,
        small_blind: Chips,
        big_blind: Chips,
    },
    HandStart {
        hand: usize,
        seats: Vec<SeatView>,
    },
    PlayerAction {
        hand: usize,
        round: Street,
        player: String,
        hole_cards: Vec<Card>,
        action: ActionKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bet_size: Option<Chips>,
    },
    DecisionFailure {
        hand: usize,
        round: Street,
        player: String,
        kind: FailureKind,
        detail: String,
    },
    EndBettingRound {
        hand: usize,
        round: Street,
        pots: Vec<PotView>,
        community_cards: Vec<Card>,
    },
    Showdown {
        hand: usize,
        winners: Vec<String>,
    },
    HandEnd {
        hand: usize,
        seats: Vec<SeatView>,
    },
    GameEnd {
        hands: usize,
        winner: String,
    },
}

impl Event {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GameStart { .. } => "game_start",
            Self::HandStart { .. } => "hand_start",
            Self::PlayerAction { .. } => "player_action",
            Self::DecisionFailure { .. } => "decision_failure",
            Self::EndBettingRound { .. } => "end_betting_round",
            Self::Showdown { .. } => "showdown",
            Self::HandEnd { .. } => "hand_end",
            Self::GameEnd { .. } => "game_end",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tagged_flat_records() {
        let event = Event::PlayerAction {
            hand: 3,
            round: Street::Flop,
            player: "alice".into(),
            hole_cards: vec![Card::try_from("As").unwrap(), Card::try_from("Td").unwrap()],
            action: ActionKind::Raise,
            bet_size: Some(400),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event": "player_action",
                "hand": 3,
                "round": "flop",
                "player": "alice",
                "hole_cards": ["As", "Td"],
                "action": "raise",
                "bet_size": 400,
            })
        );
    }

    #[test]
    fn unsized_actions_omit_bet_size() {
        let event = Event::PlayerAction {
            hand: 1,
            round: Street::Preflop,
            player: "bob".into(),
            hole_cards: vec![],
            action: ActionKind::Fold,
            bet_size: None,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("bet_size").is_none());
        assert_eq!(value["event"], json!(event.label()));
    }
}
