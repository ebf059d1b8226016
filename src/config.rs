use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 3;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Thresholds consumed by the registration validator.
///
/// Lengths are counted in UTF-16 code units of the trimmed input.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrationConfig {
    pub min_username_length: usize,
    pub min_password_length: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse registration config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} must be a positive integer")]
    NotPositive { field: &'static str },
}

impl RegistrationConfig {
    pub fn new(
        min_username_length: usize,
        min_password_length: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            min_username_length,
            min_password_length,
        };
        config.check()?;
        Ok(config)
    }

    /// Parses a TOML document. Missing keys fall back to the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.check()?;
        tracing::debug!(
            min_username_length = config.min_username_length,
            min_password_length = config.min_password_length,
            "loaded registration config"
        );
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.min_username_length == 0 {
            return Err(ConfigError::NotPositive {
                field: "min_username_length",
            });
        }
        if self.min_password_length == 0 {
            return Err(ConfigError::NotPositive {
                field: "min_password_length",
            });
        }
        Ok(())
    }
}
