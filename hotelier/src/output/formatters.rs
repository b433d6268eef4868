//! Output formatter implementations.

use crate::{Error, Result};

use super::{OutputFormatter, ReservationView, RoomView, RESERVATION_COLUMNS, ROOM_COLUMNS};

fn header(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| c.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Formatter for tab-separated, human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_rooms(&self, rooms: &[RoomView]) -> Result<String> {
        if rooms.is_empty() {
            return Ok("No rooms configured.".to_string());
        }

        let mut lines = vec![header(&ROOM_COLUMNS)];
        lines.extend(rooms.iter().map(|room| room.row().join("\t")));
        Ok(lines.join("\n"))
    }

    fn format_reservations(&self, reservations: &[ReservationView]) -> Result<String> {
        if reservations.is_empty() {
            return Ok("No active reservations.".to_string());
        }

        let mut lines = vec![header(&RESERVATION_COLUMNS)];
        lines.extend(reservations.iter().map(|r| r.row().join("\t")));
        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value)
            .map_err(|e| Error::Output(format!("failed to serialize to JSON: {e}")))
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_rooms(&self, rooms: &[RoomView]) -> Result<String> {
        Self::render(rooms)
    }

    fn format_reservations(&self, reservations: &[ReservationView]) -> Result<String> {
        Self::render(reservations)
    }
}
