//! Codec configuration.
//!
//! The only tunable is the width the name formatter fills before the name
//! field is padded out to the 39 characters available on line 1. Defaults
//! to 30; deployments that print the full ICAO name width set it to 39.

use crate::error::ConfigError;
use crate::layout::{DEFAULT_NAME_FIELD_LENGTH, NAME_FIELD_CAPACITY};

/// Environment variable overriding [`CodecConfig::name_field_length`].
pub const NAME_FIELD_LENGTH_VAR: &str = "MRZ_NAME_FIELD_LENGTH";

/// Configuration for [`Encoder`](crate::encode::Encoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    name_field_length: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            name_field_length: DEFAULT_NAME_FIELD_LENGTH,
        }
    }
}

impl CodecConfig {
    /// Configuration with an explicit name field length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NameFieldLength`] unless `1 <= length <= 39`.
    pub fn with_name_field_length(length: usize) -> Result<Self, ConfigError> {
        if length == 0 || length > NAME_FIELD_CAPACITY {
            return Err(ConfigError::NameFieldLength {
                max: NAME_FIELD_CAPACITY,
                actual: length,
            });
        }
        Ok(Self {
            name_field_length: length,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `MRZ_NAME_FIELD_LENGTH` (default: 30, range 1-39)
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(NAME_FIELD_LENGTH_VAR) {
            Ok(raw) => Self::from_raw(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    fn from_raw(raw: &str) -> Result<Self, ConfigError> {
        let length = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidVariable {
                var: NAME_FIELD_LENGTH_VAR,
                value: raw.to_string(),
            })?;
        Self::with_name_field_length(length)
    }

    /// Width of the formatted name before padding to line capacity.
    pub fn name_field_length(&self) -> usize {
        self.name_field_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_thirty() {
        assert_eq!(CodecConfig::default().name_field_length(), 30);
    }

    #[test]
    fn accepts_full_capacity() {
        let cfg = CodecConfig::with_name_field_length(39).unwrap();
        assert_eq!(cfg.name_field_length(), 39);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            CodecConfig::with_name_field_length(40).unwrap_err(),
            ConfigError::NameFieldLength { max: 39, actual: 40 }
        );
        assert!(CodecConfig::with_name_field_length(0).is_err());
    }

    #[test]
    fn parses_raw_values() {
        assert_eq!(CodecConfig::from_raw(" 35 ").unwrap().name_field_length(), 35);
        assert!(matches!(
            CodecConfig::from_raw("wide"),
            Err(ConfigError::InvalidVariable { .. })
        ));
    }
}
