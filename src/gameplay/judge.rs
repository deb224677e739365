use crate::Position;
use crate::cards::Card;
use crate::cards::Hole;

/// Decides who holds the best hand among showdown contenders.
///
/// Hand ranking is delegated so the table itself stays free of evaluation
/// logic. Implementations return every contender tied for best.
pub trait Judge: Send {
    fn best(&self, contenders: &[(Position, Hole)], board: &[Card]) -> Vec<Position>;
}

/// Seven-card evaluation backed by `rs_poker`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    fn convert(card: Card) -> Option<rs_poker::core::Card> {
        let text = card.to_string();
        let mut chars = text.chars();
        let value = rs_poker::core::Value::from_char(chars.next()?)?;
        let suit = rs_poker::core::Suit::from_char(chars.next()?)?;
        Some(rs_poker::core::Card::new(value, suit))
    }
    fn rank(hole: Hole, board: &[Card]) -> Option<rs_poker::core::Rank> {
        use rs_poker::core::Rankable;
        let mut hand = rs_poker::core::Hand::default();
        for card in hole.cards().into_iter().chain(board.iter().copied()) {
            hand.insert(Self::convert(card)?);
        }
        Some(hand.rank())
    }
}

impl Judge for Evaluator {
    fn best(&self, contenders: &[(Position, Hole)], board: &[Card]) -> Vec<Position> {
        let ranked = contenders
            .iter()
            .filter_map(|(pos, hole)| Self::rank(*hole, board).map(|rank| (*pos, rank)))
            .collect::<Vec<_>>();
        match ranked.iter().map(|(_, rank)| rank).max() {
            Some(top) => ranked
                .iter()
                .filter(|(_, rank)| rank == top)
                .map(|(pos, _)| *pos)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_beats_pair() {
        let board = Card::parse("Ah 9h 4h Kc 2d").unwrap();
        let flush = Hole::try_from("Th 3h").unwrap();
        let pair = Hole::try_from("Ac Qd").unwrap();
        assert_eq!(Evaluator.best(&[(0, pair), (1, flush)], &board), vec![1]);
    }

    #[test]
    fn board_plays_for_everyone() {
        let board = Card::parse("As Ks Qs Js Ts").unwrap();
        let a = Hole::try_from("2c 3d").unwrap();
        let b = Hole::try_from("4c 5d").unwrap();
        assert_eq!(Evaluator.best(&[(0, a), (2, b)], &board), vec![0, 2]);
    }
}
