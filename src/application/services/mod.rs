//! Application services - Use case implementations
//!
//! The sheet service is the boundary the UI layer drives. It owns the
//! in-memory sheet and the persistence gateway that stores it.

pub mod builder_service;
pub mod persistence_gateway;
pub mod sheet_service;

pub use builder_service::{BuilderStep, BuilderSummary, BuilderWizard};
pub use persistence_gateway::{
    PersistenceGateway, StorageKeys, DEFAULT_ABILITIES_KEY, DEFAULT_CHARACTER_KEY,
};
pub use sheet_service::SheetService;
