mod core;
mod flag;
mod registry;

pub use self::core::*;
pub use flag::*;
pub use registry::*;
