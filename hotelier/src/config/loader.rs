//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading hotelier configuration files
//! from various locations with proper precedence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::HotelConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "hotelier.yaml";

/// Precedence of the user-level configuration file.
pub const USER_PRECEDENCE: u8 = 1;

/// Precedence of a discovered project configuration file.
pub const PROJECT_PRECEDENCE: u8 = 2;

/// Precedence of a file passed explicitly to the builder.
pub const EXPLICIT_PRECEDENCE: u8 = 3;

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: HotelConfig,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use hotelier::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.hotelier/hotelier.yaml` (precedence 1)
    /// 2. The nearest `hotelier.yaml` walking up from `working_dir` (precedence 2)
    ///
    /// `user_dir` replaces `~/.hotelier` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        if let Some(project) = Self::discover_project_config(working_dir)? {
            sources.push(project);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => match home::home_dir() {
                Some(home) => home.join(".hotelier").join(CONFIG_FILE_NAME),
                None => {
                    log::debug!("no home directory; skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        Self::load_source(config_path, USER_PRECEDENCE).map(Some)
    }

    /// Finds the nearest `hotelier.yaml` in `start_dir` or its ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Self::load_source(candidate, PROJECT_PRECEDENCE).map(Some);
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Loads a file as a source with the given precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it lists
    /// the same room or guest id twice.
    pub fn load_source(path: PathBuf, precedence: u8) -> Result<ConfigSource> {
        log::debug!("loading configuration from {}", path.display());
        let config = Self::load_file(&path)?;
        ConfigValidator::validate_unique_ids(&config)?;
        Ok(ConfigSource {
            path,
            precedence,
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the file cannot be read and `Configuration`
    /// if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<HotelConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }
}
