//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the registry.

use crate::error::{Error, Result};
use crate::money::Money;
use crate::payment::{PaymentCapability, Receipt};
use crate::registry::{Registry, Retirement};
use crate::reservation::{Reservation, ReservationId};

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExecutionResult {
    /// Descriptions of actions that were taken.
    pub(crate) actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub(crate) warnings: Vec<String>,

    /// The reservation that was opened (bookings only).
    pub(crate) reservation: Option<ReservationId>,

    /// The receipt issued (checkouts only).
    pub(crate) receipt: Option<Receipt>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan) -> Self {
        Self {
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation: None,
            receipt: None,
        }
    }
}

/// Executes operation plans against the registry.
///
/// The executor must run under the same lock the plan was built under; it
/// relies on the planner having checked every precondition.
pub(crate) struct PlanExecutor<'a> {
    registry: &'a mut Registry,
    payment: Option<&'a dyn PaymentCapability>,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    pub(crate) fn new(registry: &'a mut Registry) -> Self {
        Self {
            registry,
            payment: None,
        }
    }

    /// Supplies the capability used by `Collect` actions.
    #[must_use]
    pub(crate) fn with_payment(mut self, payment: &'a dyn PaymentCapability) -> Self {
        self.payment = Some(payment);
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns `PaymentFailed` if a `Collect` action is declined. Collection
    /// happens before any registry change, so nothing is committed in that
    /// case. Any other error means the plan did not match the registry.
    pub(crate) fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::new(plan);
        let mut collected: Option<(u32, Money)> = None;

        for action in &plan.actions {
            match action {
                PlanAction::OpenReservation { guest, room, stay } => {
                    let id = self.registry.issue_id()?;
                    let target = self.registry.room_mut(room)?;
                    let reservation =
                        Reservation::create(id.clone(), guest.clone(), target, *stay)?;
                    self.registry.insert_reservation(reservation);
                    log::info!("booked {id}: room {room} for guest {guest} ({stay})");
                    result.reservation = Some(id);
                }
                PlanAction::OccupyRoom { reservation, room } => {
                    self.registry.room_mut(room)?.arrive()?;
                    log::info!("checked in {reservation} to room {room}");
                }
                PlanAction::Collect {
                    reservation,
                    nights,
                    amount,
                } => {
                    self.collect(reservation, *amount)?;
                    collected = Some((*nights, *amount));
                }
                PlanAction::CloseReservation { reservation, room } => {
                    self.registry.room_mut(room)?.release()?;
                    self.registry.retire(reservation, Retirement::CheckedOut)?;
                    let (nights, amount) = collected.unwrap_or((0, Money::ZERO));
                    log::info!("checked out {reservation}: room {room} released, {amount} collected");
                    result.receipt = Some(Receipt {
                        reservation: reservation.clone(),
                        room: room.clone(),
                        nights,
                        amount,
                    });
                }
                PlanAction::CancelReservation { reservation, room } => {
                    let (entry, bound_room) = self.registry.reservation_and_room_mut(reservation)?;
                    entry.cancel(bound_room)?;
                    self.registry.retire(reservation, Retirement::Cancelled)?;
                    log::info!("cancelled {reservation}: room {room} released");
                }
            }
        }

        Ok(result)
    }

    fn collect(&self, reservation: &ReservationId, amount: Money) -> Result<()> {
        let payment = self.payment.ok_or_else(|| Error::Validation {
            field: "payment".into(),
            message: format!("no payment capability supplied for {reservation}"),
        })?;

        if payment.process(amount).is_approved() {
            log::debug!("payment of {amount} approved for {reservation}");
            Ok(())
        } else {
            log::warn!("payment of {amount} declined for {reservation}");
            Err(Error::PaymentFailed {
                reservation: reservation.clone(),
                amount,
            })
        }
    }
}
