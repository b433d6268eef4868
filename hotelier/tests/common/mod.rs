//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for seeding a coordinator with a
//! small room pool and guest list.

use chrono::NaiveDate;

use hotelier::{
    Guest, GuestId, Money, PaymentCapability, PaymentOutcome, ReservationCoordinator, Room,
    RoomCategory, RoomId, StayDates,
};

/// The guest registered by [`hotel_with_rooms`].
#[allow(dead_code)]
pub const GUEST: &str = "g1";

/// Builds a coordinator with `count` single rooms named `R1..=Rcount`, each
/// at `rate` per night, and one guest.
#[allow(dead_code)]
pub fn hotel_with_rooms(count: usize, rate: u64) -> ReservationCoordinator {
    let hotel = ReservationCoordinator::new();
    for n in 1..=count {
        hotel
            .register_room(Room::new(
                room_id(&format!("R{n}")),
                RoomCategory::Single,
                Money::from_major(rate),
            ))
            .unwrap();
    }
    hotel
        .register_guest(Guest::builder(guest_id(GUEST), "Test Guest").build().unwrap())
        .unwrap();
    hotel
}

/// Parses a room id, panicking on invalid input.
#[allow(dead_code)]
pub fn room_id(id: &str) -> RoomId {
    RoomId::new(id).unwrap()
}

/// Parses a guest id, panicking on invalid input.
#[allow(dead_code)]
pub fn guest_id(id: &str) -> GuestId {
    GuestId::new(id).unwrap()
}

/// A stay of `nights` nights starting 2024-01-01.
#[allow(dead_code)]
pub fn stay(nights: u64) -> StayDates {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    StayDates::new(start, start + chrono::Days::new(nights)).unwrap()
}

/// A payment capability that always gives the same answer.
#[allow(dead_code)]
pub struct FixedPayment(pub bool);

impl PaymentCapability for FixedPayment {
    fn process(&self, _amount: Money) -> PaymentOutcome {
        self.0.into()
    }
}
