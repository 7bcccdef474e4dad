//! Storage infrastructure - Storage implementations

mod factory;
mod in_memory;
mod json_file;
mod postgres;

pub use factory::{StorageBackend, StorageConfig, StorageFactory};
pub use in_memory::InMemoryStorage;
pub use json_file::JsonFileStorage;
pub use postgres::{PostgresConfig, PostgresStorage};
