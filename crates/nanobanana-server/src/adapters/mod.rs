//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod imgbb;
pub mod postgres;
pub mod storage;
pub mod together;

// Re-exports
pub use imgbb::ImgbbHost;
pub use postgres::PgElementRepository;
pub use storage::UploadStorage;
pub use together::TogetherImageGenerator;
