#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotelier
//!
//! A library for coordinating exclusive room reservations.
//!
//! Guests book a room for a stay, check in, and check out by paying
//! `rate × nights` through a [`PaymentCapability`]. Every change goes through
//! a [`ReservationCoordinator`], which serializes operations behind a single
//! lock so that a room and its reservation always change together.
//!
//! ## Core Types
//!
//! - [`Room`] and [`RoomStatus`]: the exclusive-occupancy state machine
//! - [`Reservation`], [`ReservationId`] and [`StayDates`]: booking records
//! - [`Guest`] and [`GuestId`]: the parties that request rooms
//! - [`PaymentCapability`], [`CardPayment`] and [`CashPayment`]: payment boundary
//! - [`ReservationCoordinator`]: the only entry point for state changes
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hotelier::{
//!     CashPayment, Error, Guest, GuestId, Money, ReservationCoordinator, Room, RoomCategory,
//!     RoomId, StayDates,
//! };
//!
//! let hotel = ReservationCoordinator::new();
//! let room = RoomId::new("101").unwrap();
//! let guest = GuestId::new("g1").unwrap();
//! hotel.register_room(Room::new(room.clone(), RoomCategory::Single, Money::from_major(100))).unwrap();
//! hotel.register_guest(Guest::builder(guest.clone(), "Ada").build().unwrap()).unwrap();
//!
//! let stay = StayDates::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//! )
//! .unwrap();
//!
//! let id = hotel.book(&guest, &room, stay).unwrap();
//! assert!(matches!(
//!     hotel.book(&guest, &room, stay),
//!     Err(Error::ResourceUnavailable { .. })
//! ));
//!
//! hotel.check_in(&id).unwrap();
//! let short = CashPayment::new(Money::from_major(150));
//! assert!(matches!(hotel.check_out(&id, &short), Err(Error::PaymentFailed { .. })));
//!
//! let receipt = hotel.check_out(&id, &CashPayment::new(Money::from_major(200))).unwrap();
//! assert_eq!(receipt.amount.to_string(), "200.00");
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod guest;
pub mod logging;
pub mod money;
pub mod operations;
pub mod output;
pub mod payment;
pub mod registry;
pub mod reservation;
pub mod room;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, HotelConfig};
pub use coordinator::ReservationCoordinator;
pub use error::{EntityKind, Error, Result, RoomAction};
pub use guest::{Guest, GuestBuilder, GuestId};
pub use logging::{init_logger, LogLevel, Logger};
pub use money::Money;
pub use operations::{BookRequest, OperationPlan, PlanAction};
pub use output::{OutputFormat, OutputFormatter, ReservationView, RoomView};
pub use payment::{CardPayment, CashPayment, PaymentCapability, PaymentOutcome, Receipt};
pub use registry::{RetiredReservation, Retirement, DEFAULT_ID_PREFIX};
pub use reservation::{Reservation, ReservationId, ReservationStatus, StayDates, ValidationError};
pub use room::{Room, RoomCategory, RoomId, RoomStatus};
