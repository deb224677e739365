use super::*;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum Step {
    Propose(Proposal),
    Fail(DecisionError),
    /// Never answer; exercises the decision timeout.
    Stall,
}

/// Test double that replays a fixed sequence of replies and records every
/// request it was shown. Once the script runs out it keeps repeating the
/// `otherwise` step.
#[derive(Debug, Clone)]
pub struct Scripted {
    steps: VecDeque<Step>,
    otherwise: Step,
    seen: Arc<Mutex<Vec<Request>>>,
}

impl Scripted {
    pub fn new<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Step>,
    {
        Self {
            steps: steps.into_iter().collect(),
            otherwise: Step::Fail(DecisionError::Transport("script exhausted".into())),
            seen: Arc::default(),
        }
    }
    pub fn always(step: Step) -> Self {
        Self::new([]).otherwise(step)
    }
    pub fn otherwise(mut self, step: Step) -> Self {
        self.otherwise = step;
        self
    }
    /// Shared handle on the requests received so far. Stays valid after the
    /// provider has been boxed and handed to a table.
    pub fn seen(&self) -> Arc<Mutex<Vec<Request>>> {
        self.seen.clone()
    }
}

#[async_trait::async_trait]
impl Provider for Scripted {
    async fn propose(&mut self, request: &Request) -> Result<Proposal, DecisionError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.clone());
        }
        match self.steps.pop_front().unwrap_or_else(|| self.otherwise.clone()) {
            Step::Propose(proposal) => Ok(proposal),
            Step::Fail(error) => Err(error),
            Step::Stall => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::ActionKind;
    use crate::gameplay::LegalActions;

    #[tokio::test]
    async fn replays_then_repeats() {
        let legal = LegalActions::new(vec![ActionKind::Fold, ActionKind::Call], None).unwrap();
        let request = Request {
            player: "p".into(),
            prompt: "go".into(),
            schema: Schema::from(&legal),
        };
        let mut scripted = Scripted::new([Step::Propose(Proposal::new("call"))])
            .otherwise(Step::Propose(Proposal::new("fold")));
        let seen = scripted.seen();
        assert_eq!(scripted.propose(&request).await, Ok(Proposal::new("call")));
        assert_eq!(scripted.propose(&request).await, Ok(Proposal::new("fold")));
        assert_eq!(scripted.propose(&request).await, Ok(Proposal::new("fold")));
        assert_eq!(seen.lock().unwrap().len(), 3);
    }
}
