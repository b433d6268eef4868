//! Booking operation planning.
//!
//! A booking is planned against a snapshot of the registry: the guest and
//! room must exist, and the room must be available.

use crate::error::{Error, Result};
use crate::guest::GuestId;
use crate::registry::Registry;
use crate::reservation::StayDates;
use crate::room::{RoomId, RoomStatus};

use super::plan::{OperationPlan, PlanAction};

/// Parameters of a booking.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelier::operations::BookRequest;
/// use hotelier::{GuestId, RoomId, StayDates};
///
/// let stay = StayDates::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
/// )
/// .unwrap();
/// let request = BookRequest::new(GuestId::new("g1").unwrap(), RoomId::new("101").unwrap(), stay);
/// assert_eq!(request.stay.nights(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRequest {
    /// The guest making the booking.
    pub guest: GuestId,

    /// The room to book.
    pub room: RoomId,

    /// The requested stay.
    pub stay: StayDates,
}

impl BookRequest {
    /// Creates a new booking request.
    #[must_use]
    pub const fn new(guest: GuestId, room: RoomId, stay: StayDates) -> Self {
        Self { guest, room, stay }
    }
}

/// A booking plan generator.
pub(crate) struct BookPlan<'r> {
    request: &'r BookRequest,
}

impl<'r> BookPlan<'r> {
    pub(crate) const fn new(request: &'r BookRequest) -> Self {
        Self { request }
    }

    /// Builds an operation plan for this booking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The guest or room is not registered (`NotFound`)
    /// - The room is not `Available` (`ResourceUnavailable`)
    pub(crate) fn build_plan(&self, registry: &Registry) -> Result<OperationPlan> {
        let BookRequest { guest, room, stay } = self.request;

        registry.guest(guest)?;
        let status = registry.room(room)?.status();
        if status != RoomStatus::Available {
            return Err(Error::ResourceUnavailable {
                room: room.clone(),
                status,
            });
        }

        Ok(
            OperationPlan::new(format!("Book room {room} for guest {guest}")).add_action(
                PlanAction::OpenReservation {
                    guest: guest.clone(),
                    room: room.clone(),
                    stay: *stay,
                },
            ),
        )
    }
}
