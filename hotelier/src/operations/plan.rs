//! Plan types for reservation operations.
//!
//! A plan describes what a coordinator operation will change, without
//! changing anything. Plans are built under the coordinator lock and either
//! executed immediately or handed back to the caller as a preview.

use crate::guest::GuestId;
use crate::money::Money;
use crate::reservation::{ReservationId, StayDates};
use crate::room::RoomId;

/// A single step of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Issue a reservation id, reserve the room, and index the reservation.
    OpenReservation {
        /// Guest making the booking.
        guest: GuestId,
        /// Room being booked.
        room: RoomId,
        /// Requested stay.
        stay: StayDates,
    },

    /// Mark the guest as arrived (`Reserved -> InUse`).
    OccupyRoom {
        /// Reservation being checked in.
        reservation: ReservationId,
        /// Its room.
        room: RoomId,
    },

    /// Collect payment through the capability supplied to the executor.
    Collect {
        /// Reservation being charged.
        reservation: ReservationId,
        /// Nights charged.
        nights: u32,
        /// `rate × nights`.
        amount: Money,
    },

    /// Release the room and retire the reservation as checked out.
    CloseReservation {
        /// Reservation being completed.
        reservation: ReservationId,
        /// Its room.
        room: RoomId,
    },

    /// Cancel the reservation, force-release its room, and retire it.
    CancelReservation {
        /// Reservation being cancelled.
        reservation: ReservationId,
        /// Its room.
        room: RoomId,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::OpenReservation { guest, room, stay } => {
                format!("Reserve room {room} for guest {guest} ({stay})")
            }
            Self::OccupyRoom { reservation, room } => {
                format!("Check in {reservation} to room {room}")
            }
            Self::Collect {
                reservation,
                nights,
                amount,
            } => {
                format!("Collect {amount} for {nights} night(s) on {reservation}")
            }
            Self::CloseReservation { reservation, room } => {
                format!("Release room {room} and close {reservation}")
            }
            Self::CancelReservation { reservation, room } => {
                format!("Cancel {reservation} and release room {room}")
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Actions are applied in order. Every precondition is checked while the
/// plan is built, so a plan produced under the coordinator lock and executed
/// under that same lock cannot fail halfway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book room 101");
    /// assert_eq!(plan.description, "Book room 101");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Cancel").add_warning("guest is mid-stay");
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns the amount the plan will collect, if it charges anything.
    #[must_use]
    pub fn charge(&self) -> Option<Money> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::Collect { amount, .. } => Some(*amount),
            _ => None,
        })
    }
}
