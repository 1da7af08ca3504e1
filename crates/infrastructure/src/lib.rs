//! Booker Infrastructure - Adapters and implementations
//!
//! This crate provides the reqwest implementation of the HTTP port,
//! environment configuration, tracing setup, and the assertion runner.

pub mod adapters;
pub mod config;
pub mod logging;
pub mod testing;

pub use adapters::ReqwestHttpClient;
pub use config::{BookerConfig, ConfigError};
pub use logging::init_tracing;
pub use testing::{run_assertion, run_suite};
