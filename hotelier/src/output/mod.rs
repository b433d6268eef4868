//! Output formatting for rooms and reservations.
//!
//! Views are flat, serializable snapshots built from coordinator queries.
//! Formatters turn a slice of views into text; the table and JSON formats
//! live here, front ends may add their own by implementing
//! [`OutputFormatter`].

mod formatters;

use serde::Serialize;

use crate::coordinator::ReservationCoordinator;
use crate::money::Money;
use crate::reservation::Reservation;
use crate::room::{Room, RoomCategory, RoomStatus};
use crate::Result;

pub use formatters::{JsonFormatter, TableFormatter};

/// Trait for formatting views into different output formats.
pub trait OutputFormatter {
    /// Format a list of rooms.
    ///
    /// # Errors
    ///
    /// Returns an `Output` error if rendering fails.
    fn format_rooms(&self, rooms: &[RoomView]) -> Result<String>;

    /// Format a list of reservations.
    ///
    /// # Errors
    ///
    /// Returns an `Output` error if rendering fails.
    fn format_reservations(&self, reservations: &[ReservationView]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table (human-readable).
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// Comma-separated values.
    Csv,
}

/// Column headers shared by the tabular room formats.
pub const ROOM_COLUMNS: [&str; 5] = ["room", "category", "rate", "status", "reservation"];

/// Column headers shared by the tabular reservation formats.
pub const RESERVATION_COLUMNS: [&str; 7] = [
    "reservation",
    "guest",
    "room",
    "check_in",
    "check_out",
    "nights",
    "created_at",
];

/// A room as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    /// Room id.
    pub room: String,
    /// Room category.
    pub category: RoomCategory,
    /// Nightly rate.
    pub rate: Money,
    /// Current status.
    pub status: RoomStatus,
    /// Active reservation holding the room.
    pub reservation: Option<String>,
}

impl RoomView {
    /// Builds a view of `room` held by `holder`.
    #[must_use]
    pub fn new(room: &Room, holder: Option<&Reservation>) -> Self {
        Self {
            room: room.id().to_string(),
            category: room.category(),
            rate: room.rate(),
            status: room.status(),
            reservation: holder.map(|r| r.id().to_string()),
        }
    }

    /// Snapshots every room of `hotel`, sorted by room id.
    #[must_use]
    pub fn collect(hotel: &ReservationCoordinator) -> Vec<Self> {
        let active = hotel.active_reservations();
        hotel
            .rooms()
            .iter()
            .map(|room| Self::new(room, active.iter().find(|r| r.room() == room.id())))
            .collect()
    }

    /// Returns the values in [`ROOM_COLUMNS`] order.
    #[must_use]
    pub fn row(&self) -> [String; 5] {
        [
            self.room.clone(),
            self.category.to_string(),
            self.rate.to_string(),
            self.status.to_string(),
            self.reservation.clone().unwrap_or_else(|| "-".into()),
        ]
    }
}

/// An active reservation as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationView {
    /// Reservation id.
    pub reservation: String,
    /// Guest id.
    pub guest: String,
    /// Room id.
    pub room: String,
    /// Arrival date.
    pub check_in: chrono::NaiveDate,
    /// Departure date.
    pub check_out: chrono::NaiveDate,
    /// Nights in the stay.
    pub nights: u32,
    /// When the booking was made.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Reservation> for ReservationView {
    fn from(reservation: &Reservation) -> Self {
        let stay = reservation.stay();
        Self {
            reservation: reservation.id().to_string(),
            guest: reservation.guest().to_string(),
            room: reservation.room().to_string(),
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            nights: stay.nights(),
            created_at: reservation.created_at(),
        }
    }
}

impl ReservationView {
    /// Snapshots every active reservation of `hotel`, sorted by id.
    #[must_use]
    pub fn collect(hotel: &ReservationCoordinator) -> Vec<Self> {
        hotel.active_reservations().iter().map(Self::from).collect()
    }

    /// Returns the values in [`RESERVATION_COLUMNS`] order.
    #[must_use]
    pub fn row(&self) -> [String; 7] {
        [
            self.reservation.clone(),
            self.guest.clone(),
            self.room.clone(),
            self.check_in.to_string(),
            self.check_out.to_string(),
            self.nights.to_string(),
            self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    }
}
