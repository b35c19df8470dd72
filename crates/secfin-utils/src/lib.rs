//! Shared utilities for sec-finance
//!
//! Logging setup and the configuration that drives it. Binaries call
//! [`init_tracing`] once at startup; library crates only emit `tracing` events.

pub mod config;
pub mod logging;

pub use config::{LogConfig, LogFormat};
pub use logging::{init_tracing, init_tracing_with};
