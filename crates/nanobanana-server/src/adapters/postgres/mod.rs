//! PostgreSQL Repository Implementations

mod element_repository;

pub use element_repository::PgElementRepository;
