//! Storage adapters
//!
//! Implementations of the key-value `StoragePort` that holds the sheet
//! records: a JSON file on disk and a process-local map.

mod file_store;
mod memory_store;

pub use file_store::JsonFileStore;
pub use memory_store::InMemoryStore;
