//! Configuration schema definitions.
//!
//! This module defines the YAML shape of a hotel: a handful of scalar
//! settings plus the room pool and guest list used to seed a coordinator.

use serde::{Deserialize, Serialize};

use crate::coordinator::ReservationCoordinator;
use crate::error::Result;
use crate::guest::{Guest, GuestId};
use crate::money::Money;
use crate::registry::DEFAULT_ID_PREFIX;
use crate::room::{Room, RoomCategory, RoomId};

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Complete configuration structure.
///
/// Scalar fields are optional so that several sources can be layered; see
/// [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use hotelier::config::HotelConfig;
///
/// let yaml = r#"
/// name: Grand Budapest
/// rooms:
///   - { id: 101, category: single, rate: 89.99 }
///   - { id: 102, category: suite, rate: 300 }
/// guests:
///   - { id: g1, name: Zero Moustafa }
/// "#;
///
/// let config: HotelConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.rooms.len(), 2);
/// assert_eq!(config.id_prefix(), "RES");
///
/// let hotel = config.into_coordinator().unwrap();
/// assert_eq!(hotel.rooms().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HotelConfig {
    /// Display name of the hotel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Prefix of issued reservation ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id_prefix: Option<String>,

    /// ISO 4217 code amounts are quoted in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The room pool.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rooms: Vec<RoomDefinition>,

    /// Pre-registered guests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guests: Vec<GuestDefinition>,
}

/// A room in the configured pool.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoomDefinition {
    /// Room id.
    pub id: RoomId,
    /// Room category.
    pub category: RoomCategory,
    /// Nightly rate.
    pub rate: Money,
}

/// A pre-registered guest.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GuestDefinition {
    /// Guest id.
    pub id: GuestId,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl HotelConfig {
    /// Returns the configured reservation id prefix, or the default.
    #[must_use]
    pub fn id_prefix(&self) -> &str {
        self.reservation_id_prefix
            .as_deref()
            .unwrap_or(DEFAULT_ID_PREFIX)
    }

    /// Returns the configured currency code, or the default.
    #[must_use]
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Builds a coordinator holding the configured rooms and guests.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if a guest's contact details are
    /// malformed or an id appears twice.
    pub fn into_coordinator(self) -> Result<ReservationCoordinator> {
        let hotel = ReservationCoordinator::with_id_prefix(self.id_prefix());

        for room in self.rooms {
            hotel.register_room(Room::new(room.id, room.category, room.rate))?;
        }

        for guest in self.guests {
            let guest = Guest::builder(guest.id, guest.name)
                .email(guest.email)
                .phone(guest.phone)
                .build()?;
            hotel.register_guest(guest)?;
        }

        log::info!(
            "{} ready with {} room(s)",
            self.name.as_deref().unwrap_or("hotel"),
            hotel.rooms().len()
        );
        Ok(hotel)
    }
}
