//! Logging configuration.
//!
//! The binaries build their `tracing` subscriber from this config; keeping
//! it here lets it ride along in the same serialized documents as the
//! device settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Logging settings consumed by the subscriber setup in the binaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level name (trace, debug, info, warn, error)
    pub level: String,
    /// Emit logs to stderr
    pub console_output: bool,
    /// Also write logs to `file_path`
    pub file_output: bool,
    /// Log file location used when `file_output` is set
    pub file_path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            file_output: false,
            file_path: PathBuf::from("glowlink.log"),
        }
    }
}

impl LogConfig {
    /// Parse the configured level, falling back to INFO on unknown names.
    pub fn parse_level(&self) -> LevelFilter {
        match self.level.to_lowercase().as_str() {
            "trace" => LevelFilter::TRACE,
            "debug" => LevelFilter::DEBUG,
            "info" => LevelFilter::INFO,
            "warn" => LevelFilter::WARN,
            "error" => LevelFilter::ERROR,
            "off" => LevelFilter::OFF,
            _ => LevelFilter::INFO,
        }
    }
}
