pub mod action;
pub use action::*;

pub mod error;
pub use error::*;

pub mod holdem;
pub use holdem::*;

pub mod judge;
pub use judge::*;

pub mod legal;
pub use legal::*;

pub mod pot;
pub use pot::*;

pub mod rules;
pub use rules::*;

pub mod seat;
pub use seat::*;

pub mod street;
pub use street::*;

pub mod taken;
pub use taken::*;
