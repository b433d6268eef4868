//! Property-based tests for `StayDates`, `ReservationId`, and `Reservation`.

use super::{Reservation, ReservationId, ReservationStatus, StayDates};
use crate::guest::GuestId;
use crate::money::Money;
use crate::room::{Room, RoomCategory, RoomId, RoomStatus};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

// Dates across several years, so stays cross month and leap-day boundaries
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Days::new(offset)
    })
}

fn room(rate: Money) -> Room {
    Room::new(RoomId::new("R").unwrap(), RoomCategory::Single, rate)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A stay is valid exactly when it ends after it starts
    #[test]
    fn stay_requires_positive_length(a in date_strategy(), b in date_strategy()) {
        let stay = StayDates::new(a, b);
        prop_assert_eq!(stay.is_ok(), b > a);
        if let Ok(stay) = stay {
            prop_assert_eq!(i64::from(stay.nights()), (b - a).num_days());
            prop_assert!(stay.nights() >= 1);
        }
    }

    // Billing is rate times nights, in minor units
    #[test]
    fn total_is_rate_times_nights(
        start in date_strategy(),
        nights in 1u64..400,
        rate in 1u64..1_000_000,
    ) {
        let stay = StayDates::new(start, start + Days::new(nights)).unwrap();
        let mut room = room(Money::from_minor(rate));
        let reservation = Reservation::create(
            ReservationId::new("RES", 1),
            GuestId::new("g").unwrap(),
            &mut room,
            stay,
        )
        .unwrap();

        let total = reservation.total_for(room.rate()).unwrap();
        prop_assert_eq!(total.minor_units(), rate * nights);
    }

    // Overflowing totals are reported, never wrapped
    #[test]
    fn total_overflow_is_none(nights in 2u64..400) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let stay = StayDates::new(start, start + Days::new(nights)).unwrap();
        let mut room = room(Money::from_minor(u64::MAX / 2 + 1));
        let reservation = Reservation::create(
            ReservationId::new("RES", 1),
            GuestId::new("g").unwrap(),
            &mut room,
            stay,
        )
        .unwrap();

        prop_assert!(reservation.total_for(room.rate()).is_none());
    }

    // Issued ids are distinct for distinct sequence numbers and sort in issue order
    #[test]
    fn issued_ids_order(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let (ia, ib) = (ReservationId::new("RES", a), ReservationId::new("RES", b));
        prop_assert_eq!(ia == ib, a == b);
        if a < b && b <= u64::from(u32::MAX) {
            prop_assert!(ia < ib);
        }
    }

    // Parsing trims surrounding whitespace and rejects blank input
    #[test]
    fn parse_trims(body in "[A-Z0-9]{1,12}", pad in "[ \t]{0,3}") {
        let id: ReservationId = format!("{pad}{body}{pad}").parse().unwrap();
        prop_assert_eq!(id.as_str(), body.as_str());
        prop_assert!(pad.parse::<ReservationId>().is_err());
    }

    // Cancelling always frees the room, whether or not the guest arrived
    #[test]
    fn cancel_releases_room(arrived in any::<bool>()) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut room = room(Money::from_major(100));
        let mut reservation = Reservation::create(
            ReservationId::new("RES", 1),
            GuestId::new("g").unwrap(),
            &mut room,
            StayDates::new(start, start + Days::new(1)).unwrap(),
        )
        .unwrap();
        if arrived {
            room.arrive().unwrap();
        }

        reservation.cancel(&mut room).unwrap();
        prop_assert_eq!(room.status(), RoomStatus::Available);
        prop_assert_eq!(reservation.status(), ReservationStatus::Cancelled);
        prop_assert!(reservation.cancel(&mut room).is_err());
    }
}
