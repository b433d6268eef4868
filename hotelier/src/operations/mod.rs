//! Reservation operations using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: inspects the registry, validates every precondition, and
//!    builds an [`OperationPlan`]
//! 2. **Execution**: applies the plan's actions to the registry in order
//!
//! Both phases run under the coordinator lock. The coordinator also exposes
//! the planning phase on its own (`preview_*`) so callers can see what an
//! operation would do without doing it.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hotelier::{GuestId, ReservationCoordinator, RoomId, StayDates};
//! # use hotelier::{Guest, Money, Room, RoomCategory};
//!
//! let hotel = ReservationCoordinator::new();
//! # hotel.register_room(Room::new(RoomId::new("101").unwrap(), RoomCategory::Single, Money::from_major(90))).unwrap();
//! # hotel.register_guest(Guest::builder(GuestId::new("g1").unwrap(), "Ada").build().unwrap()).unwrap();
//! let stay = StayDates::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//! )
//! .unwrap();
//!
//! let guest = GuestId::new("g1").unwrap();
//! let room = RoomId::new("101").unwrap();
//!
//! // Preview only
//! let plan = hotel.preview_book(&guest, &room, stay).unwrap();
//! assert_eq!(plan.len(), 1);
//!
//! // Plan and execute
//! let id = hotel.book(&guest, &room, stay).unwrap();
//! assert_eq!(id.as_str(), "RES00000001");
//! ```

mod book;
mod cancel;
mod check_in;
mod check_out;
mod executor;
pub mod plan;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_support;

pub use book::BookRequest;
pub use plan::{OperationPlan, PlanAction};

pub(crate) use book::BookPlan;
pub(crate) use cancel::CancelPlan;
pub(crate) use check_in::CheckInPlan;
pub(crate) use check_out::CheckOutPlan;
pub(crate) use executor::{ExecutionResult, PlanExecutor};
