//! Simulate command implementation.
//!
//! Spawns a number of threads that all try to book the same room at the same
//! moment and reports who won.

use crate::error::CliError;
use crate::utils::{open_hotel, parse_guest_id, parse_room_id, GlobalOptions};
use clap::Args;
use hotelier::{Error, Guest, GuestId, ReservationCoordinator, RoomId, StayDates};
use std::sync::{Arc, Barrier};
use std::thread;

/// Race concurrent bookers for one room.
#[derive(Args)]
pub struct SimulateCommand {
    /// Room every booker asks for
    #[arg(long, value_name = "ROOM", value_parser = parse_room_id)]
    pub room: RoomId,

    /// Number of concurrent bookers
    #[arg(
        long,
        value_name = "N",
        default_value_t = 8,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub bookers: u16,

    /// Guest the bookings are made for (registered if unknown)
    #[arg(
        long,
        value_name = "GUEST",
        default_value = "simulator",
        value_parser = parse_guest_id
    )]
    pub guest: GuestId,

    /// Length of the stay in nights, starting today
    #[arg(
        long,
        value_name = "NIGHTS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub nights: u16,
}

/// What happened to one booker.
#[derive(Debug)]
pub struct Attempt {
    pub booker: usize,
    pub outcome: hotelier::Result<hotelier::ReservationId>,
}

impl SimulateCommand {
    /// Execute the simulate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let hotel = open_hotel(global)?;
        if hotel.guest(&self.guest).is_err() {
            let guest = Guest::builder(self.guest.clone(), "Simulated guest")
                .build()
                .map_err(Error::from)?;
            hotel.register_guest(guest)?;
        }

        let today = chrono::Utc::now().date_naive();
        let stay = StayDates::new(today, today + chrono::Days::new(u64::from(self.nights)))?;
        // Unknown rooms fail every booker the same way; report that directly.
        hotel.room(&self.room)?;

        let bookers = usize::from(self.bookers);
        let attempts = race(Arc::new(hotel), &self.guest, &self.room, stay, bookers);

        let mut winners = 0;
        for attempt in &attempts {
            match &attempt.outcome {
                Ok(id) => {
                    winners += 1;
                    println!("booker {}: won {id}", attempt.booker);
                }
                Err(e) => {
                    if !global.quiet {
                        println!("booker {}: {e}", attempt.booker);
                    }
                }
            }
        }
        println!("{winners} winner(s), {} rejected", attempts.len() - winners);

        if winners == 1 {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "expected exactly one winner, got {winners}"
            )))
        }
    }
}

/// Runs `bookers` threads released together by a barrier.
pub fn race(
    hotel: Arc<ReservationCoordinator>,
    guest: &GuestId,
    room: &RoomId,
    stay: StayDates,
    bookers: usize,
) -> Vec<Attempt> {
    let barrier = Arc::new(Barrier::new(bookers));

    let handles: Vec<_> = (1..=bookers)
        .map(|booker| {
            let hotel = Arc::clone(&hotel);
            let barrier = Arc::clone(&barrier);
            let (guest, room) = (guest.clone(), room.clone());
            thread::spawn(move || {
                barrier.wait();
                Attempt {
                    booker,
                    outcome: hotel.book(&guest, &room, stay),
                }
            })
        })
        .collect();

    handles
        .into_iter()
        .enumerate()
        .map(|(index, handle)| {
            handle.join().unwrap_or_else(|_| Attempt {
                booker: index + 1,
                outcome: Err(Error::Validation {
                    field: "booker".into(),
                    message: "thread panicked".into(),
                }),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier::{Money, Room, RoomCategory};

    #[test]
    fn test_race_has_single_winner() {
        let hotel = ReservationCoordinator::new();
        let room = RoomId::new("101").unwrap();
        let guest = GuestId::new("g").unwrap();
        hotel
            .register_room(Room::new(room.clone(), RoomCategory::Single, Money::from_major(50)))
            .unwrap();
        hotel
            .register_guest(Guest::builder(guest.clone(), "G").build().unwrap())
            .unwrap();

        let today = chrono::Utc::now().date_naive();
        let stay = StayDates::new(today, today + chrono::Days::new(1)).unwrap();
        let attempts = race(Arc::new(hotel), &guest, &room, stay, 16);

        assert_eq!(attempts.len(), 16);
        assert_eq!(attempts.iter().filter(|a| a.outcome.is_ok()).count(), 1);
        assert!(attempts
            .iter()
            .filter_map(|a| a.outcome.as_ref().err())
            .all(|e| matches!(e, Error::ResourceUnavailable { .. })));
    }
}
