//! Infrastructure layer module
//!
//! - Configuration management
//! - Logging infrastructure

/// Layered configuration
pub mod config;
/// Tracing setup
pub mod logging;
