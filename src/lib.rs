//! Turn-based No-Limit Hold'em table driven by pluggable decision providers.
//!
//! Every seat's decisions come from an external [`decision::Provider`] (a
//! hosted model, a scripted double, a passive built-in). The
//! [`gameroom::Orchestrator`] sequences snapshot, prompt, provider call,
//! validation and engine update for each turn, and records everything in an
//! append-only [`journal::Journal`].
pub mod cards;
pub mod config;
pub mod decision;
pub mod gameplay;
pub mod gameroom;
pub mod journal;
pub mod prompt;
pub mod snapshot;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, blinds and bet amounts, in chips.
pub type Chips = u32;
/// Seat index around the table, 0-based.
pub type Position = usize;

// ============================================================================
// TABLE DEFAULTS
// ============================================================================
pub const STACK: Chips = 1000;
pub const SMALL_BLIND: Chips = 50;
pub const BIG_BLIND: Chips = 100;
/// Longest wait for a single provider decision.
pub const DECISION_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
/// A hand that needs more decisions than this is not going to end.
pub const MAX_TURNS_PER_HAND: usize = 1_000;

/// Seconds since the unix epoch.
pub fn timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Initialize logging: INFO to the terminal, DEBUG to `logs/<unix-secs>.log`.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", timestamp()))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
