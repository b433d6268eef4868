//! Shared test utilities for operation planner tests.

use chrono::NaiveDate;

use crate::guest::{Guest, GuestId};
use crate::money::Money;
use crate::registry::{Registry, DEFAULT_ID_PREFIX};
use crate::reservation::{Reservation, ReservationId, StayDates};
use crate::room::{Room, RoomCategory, RoomId};

/// Creates a registry with room `101` at 100/night and guest `g1` holding a
/// two-night booking for it.
///
/// # Panics
///
/// Panics if the fixture cannot be built. This is acceptable in test code
/// where we want to fail fast.
#[must_use]
pub fn registry_with_booking() -> (Registry, ReservationId) {
    let mut registry = Registry::new(DEFAULT_ID_PREFIX);
    registry
        .insert_room(Room::new(
            RoomId::new("101").unwrap(),
            RoomCategory::Double,
            Money::from_major(100),
        ))
        .unwrap();
    registry
        .insert_guest(Guest::builder(GuestId::new("g1").unwrap(), "Guest").build().unwrap())
        .unwrap();

    let id = registry.issue_id().unwrap();
    let stay = StayDates::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
    )
    .unwrap();
    let room = registry.room_mut(&RoomId::new("101").unwrap()).unwrap();
    let reservation = Reservation::create(id.clone(), GuestId::new("g1").unwrap(), room, stay).unwrap();
    registry.insert_reservation(reservation);

    (registry, id)
}
