pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

pub use crate::logging::config::LoggingConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Crate configuration loaded from grapes.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GrapesConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Defaults applied by grapes built from configuration
    #[serde(default)]
    pub defaults: StageDefaults,
}

/// Defaults for configurable grapes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageDefaults {
    /// Allowed deviation for AspectRatioGrape
    #[serde(default = "default_aspect_ratio_tolerance")]
    pub aspect_ratio_tolerance: f64,

    /// Strip markdown code fences before parsing JSON
    #[serde(default = "default_strip_code_fences")]
    pub strip_code_fences: bool,
}

impl Default for StageDefaults {
    fn default() -> Self {
        Self {
            aspect_ratio_tolerance: default_aspect_ratio_tolerance(),
            strip_code_fences: default_strip_code_fences(),
        }
    }
}

fn default_aspect_ratio_tolerance() -> f64 {
    0.01
}

fn default_strip_code_fences() -> bool {
    true
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
