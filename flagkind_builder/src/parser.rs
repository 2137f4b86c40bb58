mod base;
mod convert;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, ParseError};
pub(crate) use interface::*;
pub use middleware::GeneralParser;
