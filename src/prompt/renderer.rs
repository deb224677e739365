use crate::snapshot::Snapshot;

/// Turns a decision snapshot into the text a provider is shown.
///
/// Rendering is pure and total: every well-formed snapshot renders, and the
/// same snapshot always renders the same text.
pub trait Renderer {
    fn render(&self, snapshot: &Snapshot) -> String;
}
