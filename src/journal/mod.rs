pub mod event;
pub use event::*;

pub mod journal;
pub use journal::*;
