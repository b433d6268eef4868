//! Property-based tests for operations module.
//!
//! Random sequences of coordinator operations must never break the
//! occupancy invariants, whatever mix of successes and rejections they
//! produce.

use chrono::NaiveDate;
use proptest::prelude::*;

use crate::coordinator::ReservationCoordinator;
use crate::error::Error;
use crate::guest::{Guest, GuestId};
use crate::money::Money;
use crate::payment::{PaymentCapability, PaymentOutcome};
use crate::reservation::{ReservationId, StayDates};
use crate::room::{Room, RoomCategory, RoomId, RoomStatus};

const ROOMS: usize = 3;

#[derive(Debug, Clone)]
enum Op {
    Book { room: usize, nights: u32 },
    CheckIn(usize),
    CheckOut { target: usize, approve: bool },
    Cancel(usize),
}

struct Fixed(bool);

impl PaymentCapability for Fixed {
    fn process(&self, _amount: Money) -> PaymentOutcome {
        self.0.into()
    }
}

// Operations target either a reservation issued earlier in the run
// (modulo the number issued) or an id that was never issued.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..ROOMS, 1u32..14).prop_map(|(room, nights)| Op::Book { room, nights }),
        (0usize..16).prop_map(Op::CheckIn),
        (0usize..16, any::<bool>()).prop_map(|(target, approve)| Op::CheckOut { target, approve }),
        (0usize..16).prop_map(Op::Cancel),
    ]
}

fn hotel() -> ReservationCoordinator {
    let hotel = ReservationCoordinator::new();
    for n in 0..ROOMS {
        hotel
            .register_room(Room::new(
                RoomId::new(format!("R{n}")).unwrap(),
                RoomCategory::Single,
                Money::from_major(100),
            ))
            .unwrap();
    }
    hotel
        .register_guest(Guest::builder(GuestId::new("g").unwrap(), "Guest").build().unwrap())
        .unwrap();
    hotel
}

fn pick(issued: &[ReservationId], target: usize) -> ReservationId {
    if issued.is_empty() || target >= issued.len() * 2 {
        "NEVER-ISSUED".parse().unwrap()
    } else {
        issued[target % issued.len()].clone()
    }
}

fn is_business_outcome(err: &Error) -> bool {
    matches!(
        err,
        Error::NotFound { .. }
            | Error::ResourceUnavailable { .. }
            | Error::InvalidState { .. }
            | Error::PaymentFailed { .. }
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // The audit never finds a violation after any operation
    #[test]
    fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let hotel = hotel();
        let guest = GuestId::new("g").unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut issued: Vec<ReservationId> = Vec::new();

        for op in ops {
            let result = match op {
                Op::Book { room, nights } => {
                    let stay = StayDates::new(start, start + chrono::Days::new(u64::from(nights))).unwrap();
                    hotel
                        .book(&guest, &RoomId::new(format!("R{room}")).unwrap(), stay)
                        .map(|id| issued.push(id))
                }
                Op::CheckIn(target) => hotel.check_in(&pick(&issued, target)),
                Op::CheckOut { target, approve } => hotel
                    .check_out(&pick(&issued, target), &Fixed(approve))
                    .map(|_| ()),
                Op::Cancel(target) => hotel.cancel(&pick(&issued, target)),
            };

            if let Err(err) = result {
                prop_assert!(is_business_outcome(&err), "unexpected error: {err}");
            }
            let violations = hotel.audit();
            prop_assert!(violations.is_empty(), "violations: {violations:?}");
        }

        // Every room is either free or held by exactly the reservation that names it.
        for room in hotel.rooms() {
            let holder = hotel.reservation_for_room(room.id()).unwrap();
            prop_assert_eq!(room.status() == RoomStatus::Available, holder.is_none());
        }
    }

    // Booking a free room always succeeds and a second booking always fails
    #[test]
    fn double_booking_rejected(room in 0..ROOMS, nights in 1u32..30) {
        let hotel = hotel();
        let guest = GuestId::new("g").unwrap();
        let room = RoomId::new(format!("R{room}")).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let stay = StayDates::new(start, start + chrono::Days::new(u64::from(nights))).unwrap();

        let id = hotel.book(&guest, &room, stay).unwrap();
        let second = hotel.book(&guest, &room, stay);
        let rejected = matches!(second, Err(Error::ResourceUnavailable { .. }));
        prop_assert!(rejected);
        prop_assert_eq!(hotel.quote(&id).unwrap(), Money::from_major(100 * u64::from(nights)));
    }
}
