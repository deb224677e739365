use super::*;
use crate::Chips;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Run one No-Limit Hold'em game between the players of a roster.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// TOML file listing players, seats, templates and providers
    #[arg(long)]
    pub roster: PathBuf,
    /// Directory the game journal is written to
    #[arg(long, default_value = "journal")]
    pub journal: PathBuf,
    #[arg(long, default_value_t = crate::STACK)]
    pub stack: Chips,
    #[arg(long, default_value_t = crate::SMALL_BLIND)]
    pub small_blind: Chips,
    #[arg(long, default_value_t = crate::BIG_BLIND)]
    pub big_blind: Chips,
    /// Physical seats at the table; defaults to one per rostered player
    #[arg(long)]
    pub seats: Option<usize>,
    /// Deck seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Seconds to wait for a single decision
    #[arg(long, default_value_t = crate::DECISION_TIMEOUT.as_secs())]
    pub timeout: u64,
    /// Stop after this many hands
    #[arg(long)]
    pub hands: Option<usize>,
}

impl Settings {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            stack: self.stack,
            decision_timeout: Duration::from_secs(self.timeout),
            max_hands: self.hands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::parse_from(["table", "--roster", "players.toml"]);
        assert_eq!(settings.table(), TableConfig::default());
        assert_eq!(settings.journal, PathBuf::from("journal"));
        assert_eq!(settings.seats, None);
    }

    #[test]
    fn overrides() {
        let settings = Settings::parse_from([
            "table",
            "--roster",
            "players.toml",
            "--small-blind",
            "5",
            "--big-blind",
            "10",
            "--timeout",
            "2",
            "--seed",
            "7",
        ]);
        let table = settings.table();
        assert_eq!((table.small_blind, table.big_blind), (5, 10));
        assert_eq!(table.decision_timeout, Duration::from_secs(2));
        assert_eq!(settings.seed, Some(7));
    }
}
