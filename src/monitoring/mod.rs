//! Monitoring Module
//!
//! Structured logging through `tracing`.

pub mod logging;

pub use logging::{LogFormat, LogLevel, LoggerConfig};
