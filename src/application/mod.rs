//! Application layer - Use cases over the domain
//!
//! This layer contains:
//! - Ports: the storage contract adapters implement
//! - Services: the persistence gateway, the sheet service and the builder wizard

pub mod ports;
pub mod services;
