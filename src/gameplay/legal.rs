use super::action::ActionKind;
use crate::Chips;

/// Inclusive bounds on the size of a bet or raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChipRange {
    pub min: Chips,
    pub max: Chips,
}

impl ChipRange {
    /// Returns None when the bounds are inverted.
    pub fn new(min: Chips, max: Chips) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }
    pub fn contains(&self, chips: Chips) -> bool {
        self.min <= chips && chips <= self.max
    }
}

impl std::fmt::Display for ChipRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Ways an offer of moves can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegalError {
    #[error("no legal actions offered")]
    Empty,
    #[error("{0} offered twice")]
    Duplicate(ActionKind),
    #[error("sized action offered without a chip range")]
    MissingRange,
    #[error("chip range {0} offered without a sized action")]
    StrayRange(ChipRange),
}

/// The moves offered to the acting seat for one decision.
///
/// Produced fresh by the rules engine before every decision. The action
/// list is non-empty, ordered and duplicate-free, and the chip range is
/// present exactly when a sized kind is on offer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LegalActions {
    actions: Vec<ActionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<ChipRange>,
}

impl LegalActions {
    pub fn new(actions: Vec<ActionKind>, range: Option<ChipRange>) -> Result<Self, LegalError> {
        if actions.is_empty() {
            return Err(LegalError::Empty);
        }
        if let Some(kind) = actions
            .iter()
            .enumerate()
            .find_map(|(i, kind)| actions[..i].contains(kind).then_some(*kind))
        {
            return Err(LegalError::Duplicate(kind));
        }
        match (actions.iter().any(ActionKind::is_sized), range) {
            (true, None) => Err(LegalError::MissingRange),
            (false, Some(r)) => Err(LegalError::StrayRange(r)),
            _ => Ok(Self { actions, range }),
        }
    }
    pub fn actions(&self) -> &[ActionKind] {
        &self.actions
    }
    pub fn range(&self) -> Option<ChipRange> {
        self.range
    }
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }
}

impl std::fmt::Display for LegalActions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let kinds = self
            .actions
            .iter()
            .map(ActionKind::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        match self.range {
            Some(range) => write!(f, "[{}] {}", kinds, range),
            None => write!(f, "[{}]", kinds),
        }
    }
}
