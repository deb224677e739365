/// The kinds of move a seat may make when it is asked to act.
///
/// Sized kinds (`Bet`, `Raise`) carry a chip amount in a [`TakenAction`];
/// the rest are fully described by their kind.
///
/// [`TakenAction`]: super::TakenAction
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl ActionKind {
    pub const fn all() -> [Self; 5] {
        [Self::Fold, Self::Check, Self::Call, Self::Bet, Self::Raise]
    }
    /// Whether this kind requires a bet size.
    pub const fn is_sized(&self) -> bool {
        matches!(self, Self::Bet | Self::Raise)
    }
    pub const fn is_aggressive(&self) -> bool {
        self.is_sized()
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Bet => "bet",
            Self::Raise => "raise",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for ActionKind {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| format!("unknown action: {:?}", s))
    }
}
