use super::card::Card;
use super::hole::Hole;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// A shuffled 52-card deck dealt from the top.
///
/// Shuffling is driven by a caller-supplied rng so that a seeded table deals
/// the same cards on every run.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Creates a freshly shuffled deck.
    pub fn shuffled(rng: &mut SmallRng) -> Self {
        let mut cards = (0..52u8)
            .filter_map(|n| Card::try_from(n).ok())
            .collect::<Vec<_>>();
        cards.shuffle(rng);
        Self(cards)
    }
    /// Convenience for tests and one-off deals.
    pub fn seeded(seed: u64) -> Self {
        Self::shuffled(&mut SmallRng::seed_from_u64(seed))
    }
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    pub fn hole(&mut self) -> Option<Hole> {
        Some(Hole::from((self.draw()?, self.draw()?)))
    }
    pub fn deal(&mut self, n: usize) -> Option<Vec<Card>> {
        (0..n).map(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_deck_is_distinct() {
        let mut deck = Deck::seeded(7);
        let cards = deck.deal(52).unwrap();
        assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 52);
        assert!(deck.draw().is_none());
    }

    #[test]
    fn seeded_decks_agree() {
        assert_eq!(Deck::seeded(42).deal(5), Deck::seeded(42).deal(5));
    }
}
