use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Cards serialize as two-character strings like `"As"`
/// (ace of spades) or `"Tc"` (ten of clubs), which is also how they appear
/// in prompts and in the journal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::all()[(self.0 / 4) as usize]
    }
    pub fn suit(&self) -> Suit {
        Suit::all()[(self.0 % 4) as usize]
    }
    /// Parses a string of concatenated card notations into a vector of cards.
    /// Whitespace is ignored.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..52 => Ok(Self(n)),
            _ => Err(format!("invalid card u8: {}", n)),
        }
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Self::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(format!("card must be 2 characters: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from((Rank::Ten, Suit::Spade));
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(u8::from(card), 35);
    }

    #[test]
    fn bijective_str() {
        let card = Card::try_from("Ah").unwrap();
        assert_eq!(card.to_string(), "Ah");
        assert_eq!(Card::try_from(card.to_string().as_str()).unwrap(), card);
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("As Kd 2c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2], Card::from((Rank::Two, Suit::Club)));
        assert!(Card::parse("As K").is_err());
    }

    #[test]
    fn serde_as_string() {
        let card = Card::try_from("Qc").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Qc\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }
}
