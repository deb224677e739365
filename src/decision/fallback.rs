use crate::gameplay::ActionKind;
use crate::gameplay::LegalActions;
use crate::gameplay::TakenAction;

/// The action substituted when a provider fails: fold if offered, else the
/// cheapest passive action (check, then call). An offer with neither is
/// answered with the minimum legal aggression.
pub fn fallback(legal: &LegalActions) -> TakenAction {
    [ActionKind::Fold, ActionKind::Check, ActionKind::Call]
        .into_iter()
        .filter(|kind| legal.contains(*kind))
        .find_map(TakenAction::plain)
        .or_else(|| {
            legal
                .actions()
                .iter()
                .filter(|kind| kind.is_aggressive())
                .find_map(|kind| TakenAction::sized(*kind, legal.range()?.min))
        })
        .unwrap_or_else(TakenAction::fold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::ChipRange;

    #[test]
    fn folds_when_possible() {
        let legal = LegalActions::new(
            vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise],
            ChipRange::new(200, 1000),
        )
        .unwrap();
        assert_eq!(fallback(&legal), TakenAction::fold());
    }

    #[test]
    fn checks_when_free() {
        let legal = LegalActions::new(vec![ActionKind::Check, ActionKind::Bet], ChipRange::new(100, 1000)).unwrap();
        assert_eq!(fallback(&legal), TakenAction::check());
    }

    #[test]
    fn calls_without_fold_or_check() {
        let legal = LegalActions::new(vec![ActionKind::Call], None).unwrap();
        assert_eq!(fallback(&legal), TakenAction::call());
    }

    #[test]
    fn minimum_aggression_last() {
        let legal = LegalActions::new(vec![ActionKind::Raise], ChipRange::new(400, 800)).unwrap();
        assert_eq!(fallback(&legal), TakenAction::sized(ActionKind::Raise, 400).unwrap());
    }
}
