use crate::gameplay::ActionKind;
use crate::gameplay::ChipRange;
use crate::gameplay::LegalActions;
use serde_json::json;

/// The answer shape a provider is asked to produce for one decision:
/// an action restricted to the offered kinds and, only when sizing is on
/// offer, an integer bet size bounded by the offered range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    actions: Vec<ActionKind>,
    range: Option<ChipRange>,
}

impl From<&LegalActions> for Schema {
    fn from(legal: &LegalActions) -> Self {
        Self {
            actions: legal.actions().to_vec(),
            range: legal.range(),
        }
    }
}

impl Schema {
    pub fn actions(&self) -> &[ActionKind] {
        &self.actions
    }
    pub fn range(&self) -> Option<ChipRange> {
        self.range
    }
    /// JSON Schema for the structured answer.
    pub fn to_json(&self) -> serde_json::Value {
        let labels = self
            .actions
            .iter()
            .map(ActionKind::label)
            .collect::<Vec<_>>();
        let mut properties = serde_json::Map::new();
        properties.insert(
            "action".into(),
            json!({
                "type": "string",
                "enum": labels,
                "description": "The action to take.",
            }),
        );
        if let Some(range) = self.range {
            properties.insert(
                "bet_size".into(),
                json!({
                    "type": "integer",
                    "minimum": range.min,
                    "maximum": range.max,
                    "description": "Total chips committed this round after a bet or raise. Required for bet and raise, ignored otherwise.",
                }),
            );
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": ["action"],
            "additionalProperties": false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsized_offer_has_no_bet_field() {
        let legal = LegalActions::new(vec![ActionKind::Fold, ActionKind::Call], None).unwrap();
        let schema = Schema::from(&legal).to_json();
        assert_eq!(schema["properties"]["action"]["enum"], json!(["fold", "call"]));
        assert!(schema["properties"].get("bet_size").is_none());
    }

    #[test]
    fn sized_offer_bounds_bet_field() {
        let range = ChipRange::new(200, 1000);
        let legal = LegalActions::new(
            vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise],
            range,
        )
        .unwrap();
        let schema = Schema::from(&legal).to_json();
        assert_eq!(schema["properties"]["bet_size"]["minimum"], json!(200));
        assert_eq!(schema["properties"]["bet_size"]["maximum"], json!(1000));
        assert_eq!(schema["required"], json!(["action"]));
    }
}
