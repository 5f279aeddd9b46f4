//! Domain layer for the emergence engine
//!
//! This module contains the input records, output records and errors. It has
//! no dependency on the services or infrastructure layers.

/// Domain error types
pub mod errors;
/// Input and output records
pub mod models;
/// Ports implemented by adapters
pub mod ports;

pub use errors::{DomainError, DomainResult};
