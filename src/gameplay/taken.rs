use super::action::ActionKind;
use crate::Chips;

/// A fully resolved decision for one turn.
///
/// `bet_size` is present iff the kind is sized. Construct through
/// [`TakenAction::sized`] or [`TakenAction::plain`] (or validation) so
/// that the pairing always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TakenAction {
    action: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    bet_size: Option<Chips>,
}

impl TakenAction {
    pub fn sized(action: ActionKind, chips: Chips) -> Option<Self> {
        action.is_sized().then_some(Self {
            action,
            bet_size: Some(chips),
        })
    }
    pub fn plain(action: ActionKind) -> Option<Self> {
        (!action.is_sized()).then_some(Self {
            action,
            bet_size: None,
        })
    }
    pub fn fold() -> Self {
        Self {
            action: ActionKind::Fold,
            bet_size: None,
        }
    }
    pub fn check() -> Self {
        Self {
            action: ActionKind::Check,
            bet_size: None,
        }
    }
    pub fn call() -> Self {
        Self {
            action: ActionKind::Call,
            bet_size: None,
        }
    }
    pub fn action(&self) -> ActionKind {
        self.action
    }
    pub fn bet_size(&self) -> Option<Chips> {
        self.bet_size
    }
}

impl std::fmt::Display for TakenAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.bet_size {
            Some(chips) => write!(f, "{} {}", self.action, chips),
            None => write!(f, "{}", self.action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizing_pairs_with_kind() {
        assert!(TakenAction::sized(ActionKind::Call, 100).is_none());
        assert!(TakenAction::plain(ActionKind::Raise).is_none());
        let raise = TakenAction::sized(ActionKind::Raise, 300).unwrap();
        assert_eq!(raise.bet_size(), Some(300));
        assert_eq!(raise.to_string(), "raise 300");
        assert_eq!(TakenAction::fold().bet_size(), None);
    }
}
