//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `HOTELIER_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::HotelConfig;
use crate::error::{Error, Result};

/// Overrides the hotel name.
pub const ENV_NAME: &str = "HOTELIER_NAME";

/// Overrides the reservation id prefix.
pub const ENV_RESERVATION_ID_PREFIX: &str = "HOTELIER_RESERVATION_ID_PREFIX";

/// Overrides the currency code.
pub const ENV_CURRENCY: &str = "HOTELIER_CURRENCY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hotelier::config::{EnvironmentConfig, HotelConfig};
///
/// let mut config = HotelConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Values are trimmed; a variable that is set but blank is rejected.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if a variable is set to a blank value or
    /// is not valid unicode.
    pub fn apply_overrides(config: &mut HotelConfig) -> Result<()> {
        if let Some(name) = Self::read(ENV_NAME)? {
            config.name = Some(name);
        }

        if let Some(prefix) = Self::read(ENV_RESERVATION_ID_PREFIX)? {
            config.reservation_id_prefix = Some(prefix);
        }

        if let Some(currency) = Self::read(ENV_CURRENCY)? {
            config.currency = Some(currency.to_ascii_uppercase());
        }

        Ok(())
    }

    fn read(var: &str) -> Result<Option<String>> {
        match env::var(var) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(Error::Validation {
                        field: var.into(),
                        message: "Cannot be empty or only whitespace".into(),
                    });
                }
                log::debug!("{var} overrides configuration");
                Ok(Some(trimmed.to_string()))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(Error::Validation {
                field: var.into(),
                message: "Must be valid unicode".into(),
            }),
        }
    }
}
