use crate::Position;

/// How a game finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One seat holds every chip.
    Winner {
        name: String,
        seat: Position,
        hands: usize,
    },
    /// The hand limit was reached first.
    Halted { hands: usize },
}

impl Outcome {
    pub fn hands(&self) -> usize {
        match self {
            Self::Winner { hands, .. } => *hands,
            Self::Halted { hands } => *hands,
        }
    }
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Winner { name, .. } => Some(name),
            Self::Halted { .. } => None,
        }
    }
}
