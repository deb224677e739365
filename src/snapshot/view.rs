use crate::Chips;
use crate::Position;
use crate::gameplay::Pot;
use crate::gameplay::Rules;
use crate::gameroom::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Active,
    Eliminated,
}

/// One row of the seat table as players and the journal see it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatView {
    pub seat: Position,
    pub name: String,
    pub status: SeatStatus,
    pub stack: Chips,
    pub bet: Chips,
}

impl SeatView {
    /// Seat table for every rostered seat, in seat order.
    ///
    /// A seat holding no chips, behind or in the pot, is eliminated and
    /// shown with zero chips regardless of what the engine still lists.
    pub fn table<R>(rules: &R, roster: &Roster) -> Vec<Self>
    where
        R: Rules,
    {
        rules
            .seats()
            .iter()
            .filter_map(|seat| {
                let name = roster.name(seat.position())?.to_string();
                Some(match seat.is_broke() {
                    true => Self {
                        seat: seat.position(),
                        name,
                        status: SeatStatus::Eliminated,
                        stack: 0,
                        bet: 0,
                    },
                    false => Self {
                        seat: seat.position(),
                        name,
                        status: SeatStatus::Active,
                        stack: seat.stack(),
                        bet: seat.bet(),
                    },
                })
            })
            .collect()
    }
}

/// A pot with eligibility expressed as player names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PotView {
    pub size: Chips,
    pub eligible: Vec<String>,
}

impl PotView {
    pub fn translate(pots: &[Pot], roster: &Roster) -> Vec<Self> {
        pots.iter()
            .map(|pot| Self {
                size: pot.size,
                eligible: pot
                    .eligible
                    .iter()
                    .filter_map(|p| roster.name(*p))
                    .map(String::from)
                    .collect(),
            })
            .collect()
    }
}
