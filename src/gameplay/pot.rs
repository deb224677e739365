use super::seat::State;
use crate::Chips;
use crate::Position;

/// A main or side pot with the seats entitled to contest it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    pub size: Chips,
    pub eligible: Vec<Position>,
}

impl Pot {
    /// Layers per-seat contributions into a main pot and side pots.
    ///
    /// `spent` is each seat's total contribution this hand and `state` its
    /// participation. Only all-in contribution levels cap a pot, and a seat
    /// still betting contests every layer since it may yet call. Whatever
    /// lies above the highest all-in level forms one top pot contested by
    /// every seat still betting, matched or not. Chips nobody left can
    /// contest (folded money above every live level) fall into the last
    /// pot. Adjacent layers with identical eligibility are merged.
    pub fn layer(spent: &[Chips], state: &[State]) -> Vec<Self> {
        let mut levels = spent
            .iter()
            .zip(state)
            .filter(|(s, st)| **st == State::Shoving && **s > 0)
            .map(|(s, _)| *s)
            .collect::<Vec<_>>();
        levels.sort_unstable();
        levels.dedup();
        let mut pots = Vec::<Self>::new();
        let mut floor = 0;
        for level in levels {
            let size = spent
                .iter()
                .map(|s| (*s).min(level) - (*s).min(floor))
                .sum::<Chips>();
            let eligible = spent
                .iter()
                .zip(state)
                .enumerate()
                .filter(|(_, (s, st))| match st {
                    State::Betting => true,
                    State::Shoving => **s >= level,
                    _ => false,
                })
                .map(|(i, _)| i)
                .collect::<Vec<_>>();
            Self::push(&mut pots, size, eligible);
            floor = level;
        }
        let rest = spent.iter().map(|s| s.saturating_sub(floor)).sum::<Chips>();
        let betting = state
            .iter()
            .enumerate()
            .filter(|(_, st)| **st == State::Betting)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        match (rest, pots.last_mut()) {
            (0, _) => {}
            (_, _) if !betting.is_empty() => Self::push(&mut pots, rest, betting),
            (_, Some(last)) => last.size += rest,
            (_, None) => pots.push(Self {
                size: rest,
                eligible: Vec::new(),
            }),
        }
        pots
    }

    fn push(pots: &mut Vec<Self>, size: Chips, eligible: Vec<Position>) {
        match pots.last_mut() {
            Some(last) if last.eligible == eligible => last.size += size,
            _ => pots.push(Self { size, eligible }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: State = State::Betting;
    const F: State = State::Folding;
    const S: State = State::Shoving;
    const O: State = State::Out;

    #[test]
    fn single_pot_when_matched() {
        let pots = Pot::layer(&[100, 100], &[B, B]);
        assert_eq!(pots, vec![Pot { size: 200, eligible: vec![0, 1] }]);
    }

    #[test]
    fn folded_chips_stay_in_pot() {
        let pots = Pot::layer(&[50, 100], &[F, B]);
        assert_eq!(pots, vec![Pot { size: 150, eligible: vec![1] }]);
    }

    #[test]
    fn open_bets_do_not_split_the_pot() {
        let pots = Pot::layer(&[50, 100, 300], &[B, B, B]);
        assert_eq!(pots, vec![Pot { size: 450, eligible: vec![0, 1, 2] }]);
    }

    #[test]
    fn short_all_in_opens_side_pot() {
        let pots = Pot::layer(&[200, 500, 500], &[S, B, B]);
        assert_eq!(
            pots,
            vec![
                Pot { size: 600, eligible: vec![0, 1, 2] },
                Pot { size: 600, eligible: vec![1, 2] },
            ]
        );
    }

    #[test]
    fn callers_stay_eligible_above_an_all_in() {
        let pots = Pot::layer(&[100, 200, 600, 0], &[B, S, B, O]);
        assert_eq!(
            pots,
            vec![
                Pot { size: 500, eligible: vec![0, 1, 2] },
                Pot { size: 400, eligible: vec![0, 2] },
            ]
        );
    }

    #[test]
    fn folded_money_above_all_ins_is_dead() {
        let pots = Pot::layer(&[300, 100, 200], &[F, S, S]);
        assert_eq!(
            pots,
            vec![
                Pot { size: 300, eligible: vec![1, 2] },
                Pot { size: 300, eligible: vec![2] },
            ]
        );
    }

    #[test]
    fn pot_total_is_conserved() {
        let spent = [300, 1000, 40, 1000];
        let state = [S, B, F, B];
        let pots = Pot::layer(&spent, &state);
        assert_eq!(pots.iter().map(|p| p.size).sum::<Chips>(), spent.iter().sum::<Chips>());
    }
}
