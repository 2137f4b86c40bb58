//! Builder module for `flagkind`.
//! See [documentation root](https://docs.rs/flagkind/latest/flagkind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, GeneralParser, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
