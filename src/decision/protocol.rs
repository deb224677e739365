use super::*;
use crate::Chips;
use crate::gameplay::ActionKind;
use crate::gameplay::LegalActions;
use crate::gameplay::TakenAction;
use serde_json::Value;

/// Boundary between untyped provider output and the typed game.
pub struct Protocol;

impl Protocol {
    /// Parse a structured answer out of raw JSON. Anything that is not an
    /// object with a string `action` is a protocol failure.
    pub fn decode(value: &Value) -> Result<Proposal, DecisionError> {
        serde_json::from_value::<Proposal>(value.clone())
            .map_err(|e| DecisionError::Protocol(format!("{} in {}", e, value)))
    }

    /// Accept a proposal only if it names an offered kind and, for sized
    /// kinds, carries a whole chip amount inside the offered range.
    /// Out-of-range sizes are rejected outright, never clamped. A size sent
    /// alongside an unsized kind is ignored.
    pub fn validate(proposal: &Proposal, legal: &LegalActions) -> Result<TakenAction, Violation> {
        let kind = ActionKind::try_from(proposal.action.as_str())
            .map_err(|_| Violation::Unknown(proposal.action.clone()))?;
        if !legal.contains(kind) {
            return Err(Violation::Unoffered(kind));
        }
        if !kind.is_sized() {
            return TakenAction::plain(kind).ok_or(Violation::Unoffered(kind));
        }
        let range = legal.range().ok_or(Violation::Unoffered(kind))?;
        let size = match &proposal.bet_size {
            None | Some(Value::Null) => return Err(Violation::MissingSize(kind)),
            Some(value) => Self::chips(value)?,
        };
        let chips = Chips::try_from(size)
            .ok()
            .filter(|chips| range.contains(*chips))
            .ok_or(Violation::OutOfRange { size, range })?;
        TakenAction::sized(kind, chips).ok_or(Violation::MissingSize(kind))
    }

    /// Whole numbers, integral floats and numeric strings all count.
    fn chips(value: &Value) -> Result<i64, Violation> {
        let integral = |f: f64| (f.is_finite() && f.fract() == 0.0).then_some(f as i64);
        match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            _ => None,
        }
        .ok_or_else(|| Violation::NotChips(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::ChipRange;
    use serde_json::json;

    fn raising() -> LegalActions {
        LegalActions::new(
            vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise],
            ChipRange::new(100, 900),
        )
        .unwrap()
    }

    fn checking() -> LegalActions {
        LegalActions::new(vec![ActionKind::Check, ActionKind::Bet], ChipRange::new(100, 900)).unwrap()
    }

    #[test]
    fn accepts_offered_unsized() {
        let taken = Protocol::validate(&Proposal::new("call"), &raising()).unwrap();
        assert_eq!(taken, TakenAction::call());
    }

    #[test]
    fn ignores_size_on_unsized() {
        let taken = Protocol::validate(&Proposal::sized("call", 12345), &raising()).unwrap();
        assert_eq!(taken.bet_size(), None);
    }

    #[test]
    fn rejects_unoffered() {
        let err = Protocol::validate(&Proposal::new("fold"), &checking()).unwrap_err();
        assert_eq!(err, Violation::Unoffered(ActionKind::Fold));
        let err = Protocol::validate(&Proposal::new("shove"), &checking()).unwrap_err();
        assert_eq!(err, Violation::Unknown("shove".into()));
    }

    #[test]
    fn sized_requires_size() {
        let err = Protocol::validate(&Proposal::new("raise"), &raising()).unwrap_err();
        assert_eq!(err, Violation::MissingSize(ActionKind::Raise));
    }

    #[test]
    fn never_clamps() {
        let err = Protocol::validate(&Proposal::sized("raise", 5000), &raising()).unwrap_err();
        assert_eq!(
            err,
            Violation::OutOfRange {
                size: 5000,
                range: ChipRange { min: 100, max: 900 },
            }
        );
        let err = Protocol::validate(&Proposal::sized("raise", 99), &raising()).unwrap_err();
        assert!(matches!(err, Violation::OutOfRange { size: 99, .. }));
    }

    #[test]
    fn range_is_inclusive() {
        let low = Protocol::validate(&Proposal::sized("bet", 100), &checking()).unwrap();
        let high = Protocol::validate(&Proposal::sized("bet", 900), &checking()).unwrap();
        assert_eq!(low.bet_size(), Some(100));
        assert_eq!(high.bet_size(), Some(900));
    }

    #[test]
    fn lenient_number_parsing() {
        let legal = raising();
        let string = Proposal {
            action: "raise".into(),
            bet_size: Some(json!(" 300 ")),
        };
        let float = Proposal {
            action: "raise".into(),
            bet_size: Some(json!(300.0)),
        };
        let fraction = Proposal {
            action: "raise".into(),
            bet_size: Some(json!(300.5)),
        };
        let word = Proposal {
            action: "raise".into(),
            bet_size: Some(json!("lots")),
        };
        let negative = Proposal {
            action: "raise".into(),
            bet_size: Some(json!(-300)),
        };
        assert_eq!(Protocol::validate(&string, &legal).unwrap().bet_size(), Some(300));
        assert_eq!(Protocol::validate(&float, &legal).unwrap().bet_size(), Some(300));
        assert!(matches!(Protocol::validate(&fraction, &legal), Err(Violation::NotChips(_))));
        assert!(matches!(Protocol::validate(&word, &legal), Err(Violation::NotChips(_))));
        assert!(matches!(
            Protocol::validate(&negative, &legal),
            Err(Violation::OutOfRange { size: -300, .. })
        ));
    }

    #[test]
    fn decode_requires_action() {
        assert!(Protocol::decode(&json!({"action": "Check"})).is_ok());
        assert!(matches!(
            Protocol::decode(&json!({"bet_size": 100})),
            Err(DecisionError::Protocol(_))
        ));
        assert!(matches!(
            Protocol::decode(&json!("fold")),
            Err(DecisionError::Protocol(_))
        ));
    }
}
