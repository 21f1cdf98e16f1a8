use super::{ConfigError, ConfigValidator, GrapesConfig};
use crate::logging::layers::console::ConsoleOutput;
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "grapes.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from `dir/grapes.toml`, falling back to defaults when the file is absent.
    /// Environment variables override file values; the result is validated.
    pub fn load_from_dir(dir: &Path) -> Result<GrapesConfig, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let mut config = Self::load_from_file(&config_path)?.unwrap_or_default();

        Self::apply_env_overrides(&mut config);
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Load config from a specific file path.
    /// Returns Ok(None) if the file doesn't exist.
    pub fn load_from_file(path: &Path) -> Result<Option<GrapesConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: GrapesConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Environment variables take precedence over config file values.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut GrapesConfig) {
        if let Ok(level) = env::var("GRAPES_LOG_LEVEL") {
            if !level.trim().is_empty() {
                config.logging.default_level = level;
            }
        }

        if let Ok(log_dir) = env::var("GRAPES_LOG_DIR") {
            config.logging.log_dir = Some(PathBuf::from(log_dir));
        }

        if let Ok(enable_file) = env::var("GRAPES_LOG_FILE") {
            if let Ok(enable_file) = enable_file.parse::<bool>() {
                config.logging.enable_file = enable_file;
            }
        }

        if let Ok(console_output) = env::var("GRAPES_CONSOLE_OUTPUT") {
            if let Ok(console_output) = console_output.parse::<ConsoleOutput>() {
                config.logging.console_output = console_output;
            }
        }

        if let Ok(tolerance) = env::var("GRAPES_ASPECT_RATIO_TOLERANCE") {
            if let Ok(tolerance) = tolerance.parse::<f64>() {
                config.defaults.aspect_ratio_tolerance = tolerance;
            }
        }

        if let Ok(strip) = env::var("GRAPES_STRIP_CODE_FENCES") {
            if let Ok(strip) = strip.parse::<bool>() {
                config.defaults.strip_code_fences = strip;
            }
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "GRAPES_LOG_LEVEL - Override the default tracing directive (default: info)",
            "GRAPES_LOG_DIR - Override the log directory (default: ~/.grapes/logs)",
            "GRAPES_LOG_FILE - Enable or disable the file sink (true/false, default: false)",
            "GRAPES_CONSOLE_OUTPUT - Console sink: stdout, stderr or none (default: stderr)",
            "GRAPES_ASPECT_RATIO_TOLERANCE - Default AspectRatioGrape tolerance (default: 0.01)",
            "GRAPES_STRIP_CODE_FENCES - Strip ```json fences before parsing (true/false, default: true)",
        ]
    }
}
