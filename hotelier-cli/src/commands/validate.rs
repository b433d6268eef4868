//! Command to validate a hotelier configuration file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use hotelier::config::{ConfigLoader, ConfigValidator, HotelConfig};
use std::path::{Path, PathBuf};

/// Validate a hotelier configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to the resolved configuration)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = match self.config_path {
            Some(path) => Self::load_single(&path)?,
            // The layered configuration is validated while it is built.
            None => match load_configuration(global) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Validation error: {e}");
                    return Err(CliError::SemanticFailure(
                        "Configuration validation failed".to_string(),
                    ));
                }
            },
        };

        match ConfigValidator::validate(&config) {
            Ok(()) => {
                println!(
                    "Configuration is valid: {} room(s), {} guest(s)",
                    config.rooms.len(),
                    config.guests.len()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }

    fn load_single(path: &Path) -> Result<HotelConfig, CliError> {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        ConfigLoader::load_file(path).map_err(|e| {
            eprintln!("Parse error: {e}");
            CliError::SemanticFailure("Configuration file is invalid".to_string())
        })
    }
}
