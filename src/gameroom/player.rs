use crate::Position;
use crate::decision::Provider;
use crate::prompt::Template;

/// A seated participant: who they are, where they sit, and how their
/// decisions are obtained. Fixed for the whole game.
pub struct Player {
    name: String,
    seat: Position,
    provider: Box<dyn Provider>,
    template: Template,
}

impl Player {
    pub fn new<S>(name: S, seat: Position, provider: Box<dyn Provider>, template: Template) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            seat,
            provider,
            template,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn template(&self) -> &Template {
        &self.template
    }
    pub fn provider(&mut self) -> &mut dyn Provider {
        self.provider.as_mut()
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("seat", &self.seat)
            .finish_non_exhaustive()
    }
}
