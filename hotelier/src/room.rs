//! Rooms and the exclusive-occupancy state machine.
//!
//! A room cycles `Available -> Reserved -> InUse -> Available`. Release is
//! also allowed straight from `Reserved`, which is how cancellation before
//! arrival frees a room. Every other transition is rejected with
//! [`Error::InvalidTransition`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result, RoomAction};
use crate::money::Money;
use crate::reservation::{IdRepr, ValidationError};

/// Identifier of a room in the pool, e.g. `"101A"`.
///
/// # Examples
///
/// ```
/// use hotelier::RoomId;
///
/// let id = RoomId::new(" 101A ").unwrap();
/// assert_eq!(id.as_str(), "101A");
/// assert!(RoomId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Creates a room id, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty after trimming.
    pub fn new(id: impl AsRef<str>) -> std::result::Result<Self, ValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "room_id".into(),
                message: "room id must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IdRepr::deserialize(deserializer)?;
        Self::new(String::from(raw)).map_err(serde::de::Error::custom)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    /// One bed.
    Single,
    /// Two beds.
    Double,
    /// An upgraded room.
    Deluxe,
    /// A multi-room space.
    Suite,
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
            Self::Deluxe => write!(f, "deluxe"),
            Self::Suite => write!(f, "suite"),
        }
    }
}

/// Occupancy status of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// No confirmed reservation holds the room.
    Available,
    /// Booked, guest has not arrived.
    Reserved,
    /// Guest has checked in.
    InUse,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Reserved => write!(f, "reserved"),
            Self::InUse => write!(f, "in use"),
        }
    }
}

/// A bookable room.
///
/// Status changes are crate-internal: callers observe rooms through the
/// coordinator, which is the only component allowed to drive transitions.
///
/// # Examples
///
/// ```
/// use hotelier::{Money, Room, RoomCategory, RoomId, RoomStatus};
///
/// let room = Room::new(RoomId::new("101").unwrap(), RoomCategory::Double, Money::from_major(120));
/// assert_eq!(room.status(), RoomStatus::Available);
/// assert_eq!(room.rate(), Money::from_major(120));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    id: RoomId,
    category: RoomCategory,
    rate: Money,
    status: RoomStatus,
}

impl Room {
    /// Creates an available room.
    #[must_use]
    pub const fn new(id: RoomId, category: RoomCategory, rate: Money) -> Self {
        Self {
            id,
            category,
            rate,
            status: RoomStatus::Available,
        }
    }

    /// Returns the room id.
    #[must_use]
    pub const fn id(&self) -> &RoomId {
        &self.id
    }

    /// Returns the room category.
    #[must_use]
    pub const fn category(&self) -> RoomCategory {
        self.category
    }

    /// Returns the nightly rate.
    #[must_use]
    pub const fn rate(&self) -> Money {
        self.rate
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> RoomStatus {
        self.status
    }

    /// `Available -> Reserved`.
    pub(crate) fn reserve(&mut self) -> Result<()> {
        match self.status {
            RoomStatus::Available => {
                self.status = RoomStatus::Reserved;
                Ok(())
            }
            from => Err(self.rejected(from, RoomAction::Reserve)),
        }
    }

    /// `Reserved -> InUse`.
    pub(crate) fn arrive(&mut self) -> Result<()> {
        match self.status {
            RoomStatus::Reserved => {
                self.status = RoomStatus::InUse;
                Ok(())
            }
            from => Err(self.rejected(from, RoomAction::Arrive)),
        }
    }

    /// `Reserved | InUse -> Available`.
    pub(crate) fn release(&mut self) -> Result<()> {
        match self.status {
            RoomStatus::Reserved | RoomStatus::InUse => {
                self.status = RoomStatus::Available;
                Ok(())
            }
            from @ RoomStatus::Available => Err(self.rejected(from, RoomAction::Release)),
        }
    }

    /// Checks whether `action` is allowed from the current status.
    pub(crate) fn check(&self, action: RoomAction) -> Result<()> {
        let allowed = match action {
            RoomAction::Reserve => self.status == RoomStatus::Available,
            RoomAction::Arrive => self.status == RoomStatus::Reserved,
            RoomAction::Release => self.status != RoomStatus::Available,
        };
        if allowed {
            Ok(())
        } else {
            Err(self.rejected(self.status, action))
        }
    }

    fn rejected(&self, from: RoomStatus, action: RoomAction) -> Error {
        Error::InvalidTransition {
            room: self.id.clone(),
            from,
            action,
        }
    }
}
