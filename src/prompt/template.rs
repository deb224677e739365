use super::*;
use crate::snapshot::SeatStatus;
use crate::snapshot::Snapshot;
use std::fmt::Write;

/// Used when a player is configured without a template of their own.
pub const DEFAULT: &str = "\
You are {{player}}, sitting in seat {{seat}} of a No-Limit Hold'em table.
It is the {{round}} and the action is on you.

Your hole cards: {{hole_cards}}
Community cards: {{community_cards}}

Pots:
{{pots}}
Seats:
{{seats}}
You may: {{legal_actions}}

Decide your action.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unknown placeholder {{{{{0}}}}}")]
    Unknown(String),
    #[error("unclosed placeholder at byte {0}")]
    Unclosed(usize),
}

/// A named hole in a template, filled from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Player,
    Seat,
    Round,
    HoleCards,
    CommunityCards,
    Pots,
    Seats,
    LegalActions,
    Snapshot,
}

impl TryFrom<&str> for Slot {
    type Error = TemplateError;
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name.trim() {
            "player" => Ok(Self::Player),
            "seat" => Ok(Self::Seat),
            "round" => Ok(Self::Round),
            "hole_cards" => Ok(Self::HoleCards),
            "community_cards" => Ok(Self::CommunityCards),
            "pots" => Ok(Self::Pots),
            "seats" => Ok(Self::Seats),
            "legal_actions" => Ok(Self::LegalActions),
            "snapshot" => Ok(Self::Snapshot),
            other => Err(TemplateError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Slot(Slot),
}

/// A compiled prompt template.
///
/// Placeholders are written `{{name}}`. Compilation rejects unknown names
/// and unclosed braces up front, so rendering a compiled template cannot
/// fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(Vec<Piece>);

impl Template {
    pub fn compile(text: &str) -> Result<Self, TemplateError> {
        let mut pieces = Vec::new();
        let mut rest = text;
        let mut offset = 0;
        while let Some(open) = rest.find("{{") {
            let close = rest[open..]
                .find("}}")
                .ok_or(TemplateError::Unclosed(offset + open))?;
            if open > 0 {
                pieces.push(Piece::Text(rest[..open].to_string()));
            }
            pieces.push(Piece::Slot(Slot::try_from(&rest[open + 2..open + close])?));
            offset += open + close + 2;
            rest = &rest[open + close + 2..];
        }
        if !rest.is_empty() {
            pieces.push(Piece::Text(rest.to_string()));
        }
        Ok(Self(pieces))
    }

    fn fill(slot: Slot, snapshot: &Snapshot) -> String {
        let cards = |cards: &[crate::cards::Card]| match cards.is_empty() {
            true => "none".to_string(),
            false => cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        };
        match slot {
            Slot::Player => snapshot.player().to_string(),
            Slot::Seat => snapshot.seat().to_string(),
            Slot::Round => snapshot.round().to_string(),
            Slot::HoleCards => cards(snapshot.hole_cards()),
            Slot::CommunityCards => cards(snapshot.community_cards()),
            Slot::Pots => snapshot.pots().iter().fold(String::new(), |mut s, pot| {
                let _ = writeln!(s, "- {} chips, contested by {}", pot.size, pot.eligible.join(", "));
                s
            }),
            Slot::Seats => snapshot.seats().iter().fold(String::new(), |mut s, seat| {
                let _ = match seat.status {
                    SeatStatus::Active => writeln!(
                        s,
                        "- seat {} {}: stack {}, bet {}",
                        seat.seat, seat.name, seat.stack, seat.bet
                    ),
                    SeatStatus::Eliminated => {
                        writeln!(s, "- seat {} {}: eliminated", seat.seat, seat.name)
                    }
                };
                s
            }),
            Slot::LegalActions => {
                let legal = snapshot.legal_actions();
                let kinds = legal
                    .actions()
                    .iter()
                    .map(|k| k.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                match legal.range() {
                    Some(range) => format!(
                        "{} (bet or raise to a total of {} to {} chips this round)",
                        kinds, range.min, range.max
                    ),
                    None => kinds,
                }
            }
            Slot::Snapshot => serde_json::to_string_pretty(snapshot).unwrap_or_default(),
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::compile(DEFAULT).unwrap_or_else(|_| Self(vec![Piece::Text(DEFAULT.to_string())]))
    }
}

impl Renderer for Template {
    fn render(&self, snapshot: &Snapshot) -> String {
        self.0
            .iter()
            .map(|piece| match piece {
                Piece::Text(text) => text.clone(),
                Piece::Slot(slot) => Self::fill(*slot, snapshot),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Passive;
    use crate::gameplay::Holdem;
    use crate::gameplay::Rules;
    use crate::gameroom::Player;
    use crate::gameroom::Roster;

    fn snapshot() -> Snapshot {
        let mut rules = Holdem::new(2, 50, 100, 3);
        rules.sit(0, 1000).unwrap();
        rules.sit(1, 1000).unwrap();
        rules.start_hand().unwrap();
        let roster = Roster::new(vec![
            Player::new("alice", 0, Box::new(Passive), Template::default()),
            Player::new("bob", 1, Box::new(Passive), Template::default()),
        ])
        .unwrap();
        let pos = rules.player_to_act().unwrap();
        Snapshot::build(&rules, &roster, pos, rules.legal_actions().unwrap()).unwrap()
    }

    #[test]
    fn default_compiles() {
        assert!(Template::compile(DEFAULT).is_ok());
    }

    #[test]
    fn rejects_bad_placeholders() {
        assert_eq!(
            Template::compile("hi {{nobody}}"),
            Err(TemplateError::Unknown("nobody".into()))
        );
        assert_eq!(Template::compile("hi {{player"), Err(TemplateError::Unclosed(3)));
    }

    #[test]
    fn fills_slots() {
        let snapshot = snapshot();
        let template = Template::compile("{{ player }} @ {{round}}: {{community_cards}}").unwrap();
        let text = template.render(&snapshot);
        assert_eq!(text, format!("{} @ preflop: none", snapshot.player()));
    }

    #[test]
    fn rendering_is_deterministic() {
        let snapshot = snapshot();
        let template = Template::default();
        assert_eq!(template.render(&snapshot), template.render(&snapshot));
        assert!(template.render(&snapshot).contains("raise"));
    }

    #[test]
    fn plain_text_passes_through() {
        let snapshot = snapshot();
        let template = Template::compile("just act").unwrap();
        assert_eq!(template.render(&snapshot), "just act");
    }
}
