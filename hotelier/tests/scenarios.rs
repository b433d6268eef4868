//! End-to-end reservation lifecycles.
//!
//! These tests drive the public coordinator API through complete guest
//! journeys and check room and reservation state after every step.

mod common;

use common::{guest_id, hotel_with_rooms, room_id, stay, FixedPayment, GUEST};
use hotelier::{
    CardPayment, CashPayment, Error, Money, Retirement, Room, RoomCategory, RoomStatus,
};

/// Walks a booking through a declined and then an approved checkout.
///
/// **What this tests:**
/// - Booking reserves the room and issues an id
/// - Check-in moves the room to `InUse`
/// - A declined payment changes nothing
/// - An approved payment charges `rate × nights` and frees the room
///
/// **Invariant verified:**
/// A failed checkout leaves the reservation active and the guest in the room.
#[test]
fn test_declined_then_approved_checkout() {
    let hotel = hotel_with_rooms(1, 100);
    let room = room_id("R1");

    let id = hotel.book(&guest_id(GUEST), &room, stay(2)).unwrap();
    assert_eq!(hotel.room_status(&room).unwrap(), RoomStatus::Reserved);

    hotel.check_in(&id).unwrap();
    assert_eq!(hotel.room_status(&room).unwrap(), RoomStatus::InUse);

    let declined = hotel.check_out(&id, &FixedPayment(false));
    assert!(matches!(
        declined,
        Err(Error::PaymentFailed { ref amount, .. }) if *amount == Money::from_major(200)
    ));
    assert_eq!(hotel.room_status(&room).unwrap(), RoomStatus::InUse);
    assert!(hotel.reservation(&id).is_ok());

    let receipt = hotel.check_out(&id, &FixedPayment(true)).unwrap();
    assert_eq!(receipt.amount, Money::from_major(200));
    assert_eq!(receipt.nights, 2);
    assert_eq!(receipt.room, room);

    assert_eq!(hotel.room_status(&room).unwrap(), RoomStatus::Available);
    assert!(hotel.reservation(&id).is_err());
    assert!(hotel.active_reservations().is_empty());
    assert_eq!(
        hotel.retired_reservation(&id).unwrap().retirement,
        Retirement::CheckedOut
    );
}

/// Cancels a stay after the guest has arrived.
///
/// **What this tests:**
/// - Cancel is accepted while the room is `InUse`
/// - The room is force-released back to `Available`
/// - Further operations on the id report `InvalidState`
#[test]
fn test_cancel_after_check_in() {
    let hotel = hotel_with_rooms(1, 100);
    let room = room_id("R1");

    let id = hotel.book(&guest_id(GUEST), &room, stay(3)).unwrap();
    hotel.check_in(&id).unwrap();
    hotel.cancel(&id).unwrap();

    assert_eq!(hotel.room_status(&room).unwrap(), RoomStatus::Available);
    assert!(hotel.reservation_for_room(&room).unwrap().is_none());
    assert!(matches!(hotel.check_in(&id), Err(Error::InvalidState { .. })));
    assert!(matches!(
        hotel.check_out(&id, &CardPayment::new("4242")),
        Err(Error::InvalidState { .. })
    ));
    assert!(matches!(hotel.cancel(&id), Err(Error::InvalidState { .. })));
}

/// Booking then cancelling without arrival frees the room for the next guest.
#[test]
fn test_cancel_before_check_in_allows_rebooking() {
    let hotel = hotel_with_rooms(1, 80);
    let room = room_id("R1");
    let guest = guest_id(GUEST);

    let first = hotel.book(&guest, &room, stay(1)).unwrap();
    hotel.cancel(&first).unwrap();

    let second = hotel.book(&guest, &room, stay(4)).unwrap();
    assert_ne!(first, second);
    assert_eq!(hotel.quote(&second).unwrap(), Money::from_major(320));
}

/// A second check-in on the same reservation is rejected.
#[test]
fn test_check_in_twice() {
    let hotel = hotel_with_rooms(1, 100);
    let id = hotel.book(&guest_id(GUEST), &room_id("R1"), stay(1)).unwrap();

    assert!(hotel.check_in(&id).is_ok());
    assert!(matches!(hotel.check_in(&id), Err(Error::InvalidState { .. })));
}

/// Cash that does not cover the bill is declined; exact change is accepted.
#[test]
fn test_cash_checkout() {
    let hotel = hotel_with_rooms(1, 75);
    let id = hotel.book(&guest_id(GUEST), &room_id("R1"), stay(2)).unwrap();
    hotel.check_in(&id).unwrap();

    let short = CashPayment::new(Money::from_major(149));
    assert!(hotel.check_out(&id, &short).is_err());

    let exact = CashPayment::new(Money::from_major(150));
    let receipt = hotel.check_out(&id, &exact).unwrap();
    assert_eq!(receipt.amount.to_string(), "150.00");
}

/// Each room is held by at most one confirmed reservation.
///
/// **What this tests:**
/// - A reserved room rejects further bookings with `ResourceUnavailable`
/// - Other rooms remain bookable
/// - The audit reports no violations
#[test]
fn test_rooms_are_exclusive() {
    let hotel = hotel_with_rooms(3, 100);
    let guest = guest_id(GUEST);

    let ids: Vec<_> = ["R1", "R2", "R3"]
        .iter()
        .map(|room| hotel.book(&guest, &room_id(room), stay(1)).unwrap())
        .collect();

    for room in ["R1", "R2", "R3"] {
        let err = hotel.book(&guest, &room_id(room), stay(1)).unwrap_err();
        assert!(matches!(
            err,
            Error::ResourceUnavailable { status: RoomStatus::Reserved, .. }
        ));
    }

    assert_eq!(hotel.active_reservations().len(), ids.len());
    assert!(hotel.audit().is_empty());
}

/// Unknown identifiers are reported as not found, never as state errors.
#[test]
fn test_unknown_ids() {
    let hotel = hotel_with_rooms(1, 100);

    let err = hotel
        .book(&guest_id("nobody"), &room_id("R1"), stay(1))
        .unwrap_err();
    assert!(err.is_not_found());

    let err = hotel
        .book(&guest_id(GUEST), &room_id("R404"), stay(1))
        .unwrap_err();
    assert!(err.is_not_found());

    let ghost = "RES99999999".parse().unwrap();
    assert!(hotel.check_in(&ghost).unwrap_err().is_not_found());
    assert!(hotel.cancel(&ghost).unwrap_err().is_not_found());
}

/// A room without a positive rate cannot enter the pool, so checkout never
/// asks a payment capability for a zero amount.
#[test]
fn test_zero_rate_room_not_registered() {
    let hotel = hotel_with_rooms(1, 100);
    let free = Room::new(room_id("R0"), RoomCategory::Single, Money::ZERO);

    assert!(matches!(
        hotel.register_room(free),
        Err(Error::Validation { .. })
    ));
    assert!(hotel.room(&room_id("R0")).unwrap_err().is_not_found());
}
