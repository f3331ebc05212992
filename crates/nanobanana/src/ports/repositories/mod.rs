//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod element_repository;

pub use element_repository::*;
