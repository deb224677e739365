use super::*;

/// Always takes the cheapest way out: fold, else check, else call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passive;

#[async_trait::async_trait]
impl Provider for Passive {
    async fn propose(&mut self, request: &Request) -> Result<Proposal, DecisionError> {
        use crate::gameplay::ActionKind;
        [ActionKind::Fold, ActionKind::Check, ActionKind::Call]
            .into_iter()
            .find(|kind| request.schema.actions().contains(kind))
            .map(|kind| Proposal::new(kind.label()))
            .ok_or_else(|| DecisionError::Protocol("no passive action offered".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::ActionKind;
    use crate::gameplay::ChipRange;
    use crate::gameplay::LegalActions;

    fn request(legal: &LegalActions) -> Request {
        Request {
            player: "p".into(),
            prompt: String::new(),
            schema: Schema::from(legal),
        }
    }

    #[tokio::test]
    async fn checks_rather_than_bets() {
        let legal = LegalActions::new(vec![ActionKind::Check, ActionKind::Bet], ChipRange::new(100, 500)).unwrap();
        let proposal = Passive.propose(&request(&legal)).await.unwrap();
        assert_eq!(proposal, Proposal::new("check"));
    }

    #[tokio::test]
    async fn cannot_only_raise() {
        let legal = LegalActions::new(vec![ActionKind::Raise], ChipRange::new(100, 500)).unwrap();
        assert!(Passive.propose(&request(&legal)).await.is_err());
    }
}
