//! Domain Services
//!
//! Stateless operations over domain types.

mod prompt_parser;

pub use prompt_parser::*;
