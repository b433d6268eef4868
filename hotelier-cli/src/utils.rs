//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, coordinator construction, argument
//! parsing, and output formatting.

use crate::error::CliError;
use hotelier::output::{
    JsonFormatter, TableFormatter, RESERVATION_COLUMNS, ROOM_COLUMNS,
};
use hotelier::{
    ConfigBuilder, GuestId, HotelConfig, OutputFormat, OutputFormatter, ReservationCoordinator,
    ReservationView, RoomId, RoomView,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file, layered above discovered files.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `--config` file (highest priority among files)
/// 2. Environment variables
/// 3. Discovered `hotelier.yaml` files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<HotelConfig, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "File not found: {}",
                path.display()
            )));
        }
        builder = builder.with_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a coordinator seeded from the resolved configuration.
pub fn open_hotel(global: &GlobalOptions) -> Result<ReservationCoordinator, CliError> {
    let config = load_configuration(global)?;
    config
        .into_coordinator()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Parse a room id argument for clap.
pub fn parse_room_id(value: &str) -> Result<RoomId, String> {
    RoomId::new(value).map_err(|e| e.to_string())
}

/// Parse a guest id argument for clap.
pub fn parse_guest_id(value: &str) -> Result<GuestId, String> {
    GuestId::new(value).map_err(|e| e.to_string())
}

/// Choose the formatter for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Comma-separated output using the `csv` crate.
pub struct CsvFormatter;

impl CsvFormatter {
    fn render<const N: usize>(
        header: [&str; N],
        rows: impl Iterator<Item = [String; N]>,
    ) -> hotelier::Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(header).map_err(csv_error)?;
        for row in rows {
            writer.write_record(&row).map_err(csv_error)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| hotelier::Error::Output(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| hotelier::Error::Output(e.to_string()))
    }
}

/// Convert csv::Error to the library's output error.
fn csv_error(e: csv::Error) -> hotelier::Error {
    hotelier::Error::Output(e.to_string())
}

impl OutputFormatter for CsvFormatter {
    fn format_rooms(&self, rooms: &[RoomView]) -> hotelier::Result<String> {
        let rows = rooms.iter().map(|room| {
            let mut row = room.row();
            // Empty cell rather than the table placeholder.
            if room.reservation.is_none() {
                row[4].clear();
            }
            row
        });
        Self::render(ROOM_COLUMNS, rows)
    }

    fn format_reservations(&self, reservations: &[ReservationView]) -> hotelier::Result<String> {
        Self::render(RESERVATION_COLUMNS, reservations.iter().map(ReservationView::row))
    }
}
