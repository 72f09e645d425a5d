//! Outbound ports - Interfaces that the application requires from external systems

mod storage_port;

#[cfg(test)]
pub use storage_port::MockStoragePort;
pub use storage_port::{StorageError, StoragePort};
