//! Check-in operation planning.

use crate::error::{Error, Result, RoomAction};
use crate::registry::Registry;
use crate::reservation::ReservationId;
use crate::room::RoomStatus;

use super::plan::{OperationPlan, PlanAction};

/// A check-in plan generator.
pub(crate) struct CheckInPlan<'r> {
    reservation: &'r ReservationId,
}

impl<'r> CheckInPlan<'r> {
    pub(crate) const fn new(reservation: &'r ReservationId) -> Self {
        Self { reservation }
    }

    /// Builds an operation plan marking the guest as arrived.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and `InvalidState` if the
    /// reservation was retired or the guest has already checked in.
    pub(crate) fn build_plan(&self, registry: &Registry) -> Result<OperationPlan> {
        let reservation = registry.confirmed(self.reservation)?;
        let room = registry.room(reservation.room())?;

        if room.status() == RoomStatus::InUse {
            return Err(Error::InvalidState {
                reservation: self.reservation.clone(),
                reason: "guest already checked in".into(),
            });
        }
        room.check(RoomAction::Arrive)?;

        Ok(
            OperationPlan::new(format!("Check in {}", self.reservation)).add_action(
                PlanAction::OccupyRoom {
                    reservation: self.reservation.clone(),
                    room: room.id().clone(),
                },
            ),
        )
    }
}
