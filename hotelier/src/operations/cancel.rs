//! Cancellation operation planning.
//!
//! Cancelling is allowed at any point while the reservation is active. A
//! cancellation after check-in frees the room mid-stay; the plan carries a
//! warning in that case.

use crate::error::Result;
use crate::registry::Registry;
use crate::reservation::ReservationId;
use crate::room::RoomStatus;

use super::plan::{OperationPlan, PlanAction};

/// A cancellation plan generator.
pub(crate) struct CancelPlan<'r> {
    reservation: &'r ReservationId,
}

impl<'r> CancelPlan<'r> {
    pub(crate) const fn new(reservation: &'r ReservationId) -> Self {
        Self { reservation }
    }

    /// Builds an operation plan cancelling the reservation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and `InvalidState` if the
    /// reservation was already cancelled or checked out.
    pub(crate) fn build_plan(&self, registry: &Registry) -> Result<OperationPlan> {
        let reservation = registry.confirmed(self.reservation)?;
        let room = registry.room(reservation.room())?;

        let mut plan = OperationPlan::new(format!("Cancel {}", self.reservation)).add_action(
            PlanAction::CancelReservation {
                reservation: self.reservation.clone(),
                room: room.id().clone(),
            },
        );

        if room.status() == RoomStatus::InUse {
            plan = plan.add_warning(format!(
                "guest {} is checked in to room {}; cancelling releases the room mid-stay",
                reservation.guest(),
                room.id()
            ));
        }

        Ok(plan)
    }
}
