//! Checkout operation planning.
//!
//! Checkout charges `rate × nights` and then releases the room. The charge
//! is the first action of the plan so that a declined payment leaves the
//! registry untouched.

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::reservation::ReservationId;
use crate::room::RoomStatus;

use super::plan::{OperationPlan, PlanAction};

/// A checkout plan generator.
pub(crate) struct CheckOutPlan<'r> {
    reservation: &'r ReservationId,
}

impl<'r> CheckOutPlan<'r> {
    pub(crate) const fn new(reservation: &'r ReservationId) -> Self {
        Self { reservation }
    }

    /// Builds an operation plan that collects payment and closes the stay.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is unknown (`NotFound`)
    /// - The reservation was retired or the guest has not checked in (`InvalidState`)
    /// - The total does not fit in a `Money` (`InvalidAmount`)
    pub(crate) fn build_plan(&self, registry: &Registry) -> Result<OperationPlan> {
        let reservation = registry.confirmed(self.reservation)?;
        let room = registry.room(reservation.room())?;

        if room.status() != RoomStatus::InUse {
            return Err(Error::InvalidState {
                reservation: self.reservation.clone(),
                reason: "guest has not checked in".into(),
            });
        }

        let nights = reservation.stay().nights();
        let amount = reservation
            .total_for(room.rate())
            .ok_or_else(|| Error::InvalidAmount {
                value: format!("{} x {nights}", room.rate()),
                reason: "stay total is too large".into(),
            })?;

        Ok(OperationPlan::new(format!("Check out {}", self.reservation))
            .add_action(PlanAction::Collect {
                reservation: self.reservation.clone(),
                nights,
                amount,
            })
            .add_action(PlanAction::CloseReservation {
                reservation: self.reservation.clone(),
                room: room.id().clone(),
            }))
    }
}
