use super::card::Card;

/// A player's two private hole cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "[Card; 2]", from = "[Card; 2]")]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(a, b)
    }
}
impl From<[Card; 2]> for Hole {
    fn from([a, b]: [Card; 2]) -> Self {
        Self::from((a, b))
    }
}
impl From<Hole> for [Card; 2] {
    fn from(hole: Hole) -> Self {
        hole.cards()
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] if a != b => Ok(Self(*a, *b)),
            _ => Err("hole must contain exactly two distinct cards".into()),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}
