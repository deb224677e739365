pub mod error;
pub use error::*;

pub mod roster;
pub use roster::*;

#[cfg(feature = "cli")]
pub mod settings;
#[cfg(feature = "cli")]
pub use settings::*;

pub mod table;
pub use table::*;
