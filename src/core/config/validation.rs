use super::{ConfigError, GrapesConfig};
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &GrapesConfig) -> Result<(), ConfigError> {
        Directive::from_str(&config.logging.default_level).map_err(|_| {
            ConfigError::Invalid(format!(
                "logging.default_level '{}' is not a valid tracing directive",
                config.logging.default_level
            ))
        })?;

        let tolerance = config.defaults.aspect_ratio_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "defaults.aspect_ratio_tolerance must be a non-negative number, got {}",
                tolerance
            )));
        }

        Ok(())
    }
}
