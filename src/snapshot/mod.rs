pub mod snapshot;
pub use snapshot::*;

pub mod view;
pub use view::*;
