//! Core module for `optspec`.
//! See [documentation root](https://docs.rs/optspec/latest/optspec/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod printer;
pub mod types;

pub use api::*;
pub use model::*;
pub use parser::{parse_spec, ParsedSpec, SpecError};
pub use types::TypeRegistry;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
