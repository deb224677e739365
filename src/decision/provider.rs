use super::*;

/// A pluggable source of decisions.
///
/// Implementations can be remote model APIs, scripted test doubles, or
/// trivial built-ins. The orchestrator depends on nothing else, so any of
/// them can be seated without touching the game loop.
///
/// A provider answers at most one request at a time, performs no retries
/// of its own and never touches game state; failures are returned and the
/// caller decides what happens to the turn.
#[async_trait::async_trait]
pub trait Provider: Send {
    async fn propose(&mut self, request: &Request) -> Result<Proposal, DecisionError>;
}
