//! CLI command implementations.

/// `breakdown`
pub mod breakdown;
/// `classify`
pub mod classify;
/// `config`
pub mod config;
/// `evaluate`
pub mod evaluate;
/// `generate`
pub mod generate;
/// Shared snapshot source options
pub mod source;
