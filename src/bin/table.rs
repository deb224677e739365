//! Table Binary
//!
//! Seats a roster at a reference Hold'em table and plays until one player
//! holds every chip. The game trace lands in `<journal>/<unix-secs>.jsonl`.

use anyhow::Context;
use clap::Parser;
use robodealer::config::RosterConfig;
use robodealer::config::Settings;
use robodealer::gameplay::Holdem;
use robodealer::gameroom::Orchestrator;
use robodealer::gameroom::Outcome;
use robodealer::journal::Journal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    robodealer::log()?;
    let settings = Settings::parse();
    let roster = RosterConfig::load(&settings.roster)
        .and_then(|config| config.build())
        .with_context(|| format!("loading roster {}", settings.roster.display()))?;
    let seats = settings.seats.unwrap_or_else(|| {
        roster
            .iter()
            .map(|p| p.seat() + 1)
            .max()
            .unwrap_or_default()
            .max(roster.len())
    });
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("[table] {} seats, seed {}", seats, seed);
    let journal = Journal::create(&settings.journal)
        .with_context(|| format!("creating journal in {}", settings.journal.display()))?;
    let rules = Holdem::new(seats, settings.small_blind, settings.big_blind, seed);
    let mut table = Orchestrator::new(rules, roster, journal, settings.table())?;
    match table.run().await? {
        Outcome::Winner { name, hands, .. } => log::info!("[table] {} wins in {} hands", name, hands),
        Outcome::Halted { hands } => log::info!("[table] no winner after {} hands", hands),
    }
    Ok(())
}
