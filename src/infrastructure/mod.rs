//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: key-value storage adapters for the sheet records
//! - Config: Application configuration
//! - State: Wiring of storage, gateway and sheet service

pub mod config;
pub mod persistence;
pub mod state;
