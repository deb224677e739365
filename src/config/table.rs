use super::*;
use crate::Chips;
use std::time::Duration;

/// Game parameters handed to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Starting stack for every seat.
    pub stack: Chips,
    /// Upper bound on a single provider call.
    pub decision_timeout: Duration,
    /// Stop after this many hands even if nobody has won.
    pub max_hands: Option<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: crate::SMALL_BLIND,
            big_blind: crate::BIG_BLIND,
            stack: crate::STACK,
            decision_timeout: crate::DECISION_TIMEOUT,
            max_hands: None,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stack == 0 {
            return Err(ConfigError::ZeroStack);
        }
        if self.big_blind == 0 || self.small_blind > self.big_blind {
            return Err(ConfigError::Blinds {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_stacks_and_inverted_blinds() {
        let broke = TableConfig {
            stack: 0,
            ..TableConfig::default()
        };
        let inverted = TableConfig {
            small_blind: 200,
            big_blind: 100,
            ..TableConfig::default()
        };
        assert!(matches!(broke.validate(), Err(ConfigError::ZeroStack)));
        assert!(matches!(inverted.validate(), Err(ConfigError::Blinds { .. })));
    }
}
