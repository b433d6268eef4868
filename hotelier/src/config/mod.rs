//! Configuration system for hotelier.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `hotelier.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOTELIER_*`)
//! 3. Explicit files (via `ConfigBuilder::with_file`)
//! 4. Project config (nearest `hotelier.yaml`)
//! 5. User config (`~/.hotelier/hotelier.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use hotelier::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let hotel = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/srv/hotel"))
//!     .build()
//!     .unwrap()
//!     .into_coordinator()
//!     .unwrap();
//!
//! println!("{} rooms", hotel.rooms().len());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{GuestDefinition, HotelConfig, RoomDefinition};
pub use validator::ConfigValidator;
