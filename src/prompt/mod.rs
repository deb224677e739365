pub mod renderer;
pub use renderer::*;

pub mod template;
pub use template::*;
