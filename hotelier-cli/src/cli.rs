//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, RoomsCommand, RunCommand, SimulateCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for driving the hotelier reservation engine.
#[derive(Parser)]
#[command(name = "hotelier")]
#[command(version, about = "Drive the hotelier reservation engine", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file layered above discovered hotelier.yaml files
    #[arg(long, value_name = "PATH", global = true, env = "HOTELIER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the configured room pool
    Rooms(RoomsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Execute a reservation script against the configured hotel
    Run(RunCommand),

    /// Race concurrent bookers for one room
    Simulate(SimulateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
