//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `rooms`: List the configured room pool
//! - `validate`: Validate a configuration file
//! - `run`: Execute a reservation script
//! - `simulate`: Race concurrent bookers for one room
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod rooms;
pub mod run;
pub mod simulate;
pub mod validate;

pub use completions::CompletionsCommand;
pub use rooms::RoomsCommand;
pub use run::RunCommand;
pub use simulate::SimulateCommand;
pub use validate::ValidateCommand;
