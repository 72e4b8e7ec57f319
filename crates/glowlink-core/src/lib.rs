//! GlowLink Core - Domain Model for GL1 Light Control
//!
//! This crate contains the host-side domain model shared by the GlowLink
//! tools:
//! - Device configuration (YAML) and validation
//! - Unit conversions between host lighting scales and the device scale
//! - Logging configuration consumed by the binaries

#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod units;

pub use config::{ConfigError, DeviceConfig, DEFAULT_NAME, DEFAULT_PORT};
pub use logging::LogConfig;
