pub mod decide;
pub use decide::*;

pub mod error;
pub use error::*;

pub mod fallback;
pub use fallback::*;

pub mod passive;
pub use passive::*;

pub mod proposal;
pub use proposal::*;

pub mod protocol;
pub use protocol::*;

pub mod provider;
pub use provider::*;

pub mod remote;
pub use remote::*;

pub mod request;
pub use request::*;

pub mod schema;
pub use schema::*;

pub mod scripted;
pub use scripted::*;
