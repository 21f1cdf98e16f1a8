use crate::logging::layers::console::ConsoleOutput;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_LEVEL: &str = "info";

/// Logging configuration, the `[logging]` section of grapes.toml.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Tracing directive used when RUST_LOG is unset.
    #[serde(default = "default_level")]
    pub default_level: String,

    /// Directory for the log file, defaults to ~/.grapes/logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    #[serde(default)]
    pub enable_file: bool,

    #[serde(default)]
    pub console_output: ConsoleOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            log_dir: None,
            enable_file: false,
            console_output: ConsoleOutput::default(),
        }
    }
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}
