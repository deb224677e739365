pub mod error;
pub use error::*;

pub mod orchestrator;
pub use orchestrator::*;

pub mod outcome;
pub use outcome::*;

pub mod player;
pub use player::*;

pub mod roster;
pub use roster::*;
