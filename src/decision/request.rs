use super::schema::Schema;

/// Everything a provider receives for one decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub player: String,
    pub prompt: String,
    pub schema: Schema,
}
