//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, EXPLICIT_PRECEDENCE};
use crate::config::merger::ConfigMerger;
use crate::config::schema::HotelConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`HotelConfig`] from files, environment, and overrides.
///
/// Sources are applied lowest to highest precedence: user file, discovered
/// project file, explicit files (in the order given), environment, then the
/// programmatic override. The result is validated before it is returned.
///
/// # Examples
///
/// ```
/// use hotelier::config::{ConfigBuilder, HotelConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(HotelConfig { name: Some("Test".into()), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.name.as_deref(), Some("Test"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    files: Vec<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<HotelConfig>,
}

impl ConfigBuilder {
    /// Creates a builder that discovers files from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory project discovery starts from.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Replaces `~/.hotelier` as the location of the user file.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Adds an explicit file, layered above discovered files.
    ///
    /// Explicit files are loaded even when discovery is skipped.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.files.push(path.to_path_buf());
        self
    }

    /// Skips user and project file discovery.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `HOTELIER_*` environment overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layers `config` above every other source.
    #[must_use]
    pub fn with_config(mut self, config: HotelConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Loads, merges, and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// override is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<HotelConfig> {
        let mut sources = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            sources.extend(ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?);
        }

        for file in self.files {
            sources.push(ConfigLoader::load_source(file, EXPLICIT_PRECEDENCE)?);
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigValidator::validate_unique_ids(overrides)?;
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
