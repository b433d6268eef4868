//! Reservation types binding a guest to a room for a stay.
//!
//! This module provides reservation identities, validated stay intervals,
//! and the reservation lifecycle (`Confirmed -> Cancelled`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::guest::GuestId;
use crate::money::Money;
use crate::room::{Room, RoomId};

/// A coordinator-issued reservation identity, e.g. `RES0000002A`.
///
/// Identities are rendered as a prefix followed by the sequence number in
/// zero-padded upper-case hex. They never change once issued.
///
/// # Examples
///
/// ```
/// use hotelier::ReservationId;
///
/// let id: ReservationId = "RES0000002A".parse().unwrap();
/// assert_eq!(id.as_str(), "RES0000002A");
/// assert!("  ".parse::<ReservationId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Renders the identity for a sequence number.
    pub(crate) fn new(prefix: &str, sequence: u64) -> Self {
        Self(format!("{prefix}{sequence:08X}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ReservationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "reservation_id".into(),
                message: "reservation id must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stay interval: arrival date (inclusive) to departure date (exclusive).
///
/// Construction guarantees `check_out > check_in`, so every stay is at
/// least one night.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelier::StayDates;
///
/// let arrive = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let depart = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
///
/// let stay = StayDates::new(arrive, depart).unwrap();
/// assert_eq!(stay.nights(), 3);
///
/// // Same-day and reversed intervals are rejected
/// assert!(StayDates::new(arrive, arrive).is_err());
/// assert!(StayDates::new(depart, arrive).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStay")]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Creates a validated stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStay`] unless `check_out` is after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        if check_out <= check_in {
            return Err(Error::InvalidStay {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the departure date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights in the stay (always at least one).
    #[must_use]
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.check_in, self.check_out)
    }
}

#[derive(Deserialize)]
struct RawStay {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<RawStay> for StayDates {
    type Error = Error;

    fn try_from(raw: RawStay) -> Result<Self> {
        Self::new(raw.check_in, raw.check_out)
    }
}

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// The reservation holds its room.
    Confirmed,
    /// Terminal: the reservation was cancelled and its room released.
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A claim binding a guest to a room for a stay.
///
/// Reservations are created and mutated only by the coordinator; callers see
/// cloned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    id: ReservationId,
    guest: GuestId,
    room: RoomId,
    stay: StayDates,
    status: ReservationStatus,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Reserves `room` and builds a confirmed reservation for it.
    ///
    /// The room transition happens first; if the room refuses `reserve()`
    /// no reservation is built.
    pub(crate) fn create(
        id: ReservationId,
        guest: GuestId,
        room: &mut Room,
        stay: StayDates,
    ) -> Result<Self> {
        room.reserve()?;
        Ok(Self {
            id,
            guest,
            room: room.id().clone(),
            stay,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        })
    }

    /// Cancels the reservation and force-releases its room.
    ///
    /// The room is released whether the guest has arrived or not.
    pub(crate) fn cancel(&mut self, room: &mut Room) -> Result<()> {
        if self.status != ReservationStatus::Confirmed {
            return Err(Error::InvalidState {
                reservation: self.id.clone(),
                reason: format!("cannot cancel a {} reservation", self.status),
            });
        }
        room.release()?;
        self.status = ReservationStatus::Cancelled;
        Ok(())
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Returns the guest holding the reservation.
    #[must_use]
    pub const fn guest(&self) -> &GuestId {
        &self.guest
    }

    /// Returns the reserved room.
    #[must_use]
    pub const fn room(&self) -> &RoomId {
        &self.room
    }

    /// Returns the stay interval.
    #[must_use]
    pub const fn stay(&self) -> StayDates {
        self.stay
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns when the reservation was booked.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` while the reservation holds its room.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    /// Computes `rate × nights`, or `None` if the total overflows.
    #[must_use]
    pub fn total_for(&self, rate: Money) -> Option<Money> {
        rate.checked_mul(self.stay.nights())
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Serialized form of a room or guest id; YAML users write `101` as often as `"101A"`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum IdRepr {
    Text(String),
    Number(u64),
}

impl From<IdRepr> for String {
    fn from(repr: IdRepr) -> Self {
        match repr {
            IdRepr::Text(s) => s,
            IdRepr::Number(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod proptests;
