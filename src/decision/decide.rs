use super::*;
use crate::gameplay::LegalActions;
use crate::gameplay::TakenAction;
use std::time::Duration;

/// Ask a provider for one decision and hold it to the offer.
///
/// A reply that does not arrive within `timeout` is a failure like any
/// other. On success the action is guaranteed to be a member of `legal`.
pub async fn decide(
    provider: &mut dyn Provider,
    request: &Request,
    legal: &LegalActions,
    timeout: Duration,
) -> Result<TakenAction, DecisionError> {
    let proposal = tokio::time::timeout(timeout, provider.propose(request))
        .await
        .map_err(|_| DecisionError::Timeout(timeout))??;
    Ok(Protocol::validate(&proposal, legal)?)
}
