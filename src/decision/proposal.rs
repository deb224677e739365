use crate::Chips;

/// A provider's structured answer before it is checked against the offer.
///
/// The bet size is kept as raw JSON: providers are asked for an integer but
/// may send a float or a numeric string, and deciding what counts as a chip
/// amount is validation's job.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Proposal {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bet_size: Option<serde_json::Value>,
}

impl Proposal {
    pub fn new<S>(action: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            action: action.into(),
            bet_size: None,
        }
    }
    pub fn sized<S>(action: S, chips: Chips) -> Self
    where
        S: Into<String>,
    {
        Self {
            action: action.into(),
            bet_size: Some(serde_json::Value::from(chips)),
        }
    }
}

impl std::fmt::Display for Proposal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.bet_size {
            Some(size) => write!(f, "{} {}", self.action, size),
            None => write!(f, "{}", self.action),
        }
    }
}
