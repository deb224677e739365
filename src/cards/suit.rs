#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    const fn symbol(&self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| format!("invalid suit u8: {}", n))
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<char> for Suit {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|s| s.symbol() == c.to_ascii_lowercase())
            .ok_or_else(|| format!("invalid suit char: {}", c))
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
