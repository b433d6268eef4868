//! The reservation coordinator.
//!
//! [`ReservationCoordinator`] is the only way to change rooms and
//! reservations. It owns the registry behind a single mutex and runs every
//! operation (plan, then execute) while holding it, so a room and its
//! reservation always change together.

use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::guest::{Guest, GuestId};
use crate::money::Money;
use crate::operations::{
    BookPlan, BookRequest, CancelPlan, CheckInPlan, CheckOutPlan, ExecutionResult, OperationPlan,
    PlanExecutor,
};
use crate::payment::{PaymentCapability, Receipt};
use crate::registry::{Registry, RetiredReservation, DEFAULT_ID_PREFIX};
use crate::reservation::{Reservation, ReservationId, StayDates};
use crate::room::{Room, RoomId, RoomStatus};

/// Serializes every booking operation for one hotel.
///
/// The coordinator is `Sync`; share it between threads with `Arc`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelier::{
///     CardPayment, Guest, GuestId, Money, ReservationCoordinator, Room, RoomCategory, RoomId,
///     RoomStatus, StayDates,
/// };
///
/// let hotel = ReservationCoordinator::new();
/// let room = RoomId::new("R1").unwrap();
/// let guest = GuestId::new("g1").unwrap();
/// hotel.register_room(Room::new(room.clone(), RoomCategory::Double, Money::from_major(100))).unwrap();
/// hotel.register_guest(Guest::builder(guest.clone(), "Ada").build().unwrap()).unwrap();
///
/// let stay = StayDates::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
/// )
/// .unwrap();
///
/// let id = hotel.book(&guest, &room, stay).unwrap();
/// hotel.check_in(&id).unwrap();
/// assert_eq!(hotel.room_status(&room).unwrap(), RoomStatus::InUse);
///
/// let receipt = hotel.check_out(&id, &CardPayment::new("4242")).unwrap();
/// assert_eq!(receipt.amount, Money::from_major(200));
/// assert_eq!(hotel.room_status(&room).unwrap(), RoomStatus::Available);
/// ```
#[derive(Debug)]
pub struct ReservationCoordinator {
    state: Mutex<Registry>,
}

impl Default for ReservationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationCoordinator {
    /// Creates an empty coordinator issuing ids with the default prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_prefix(DEFAULT_ID_PREFIX)
    }

    /// Creates an empty coordinator issuing ids as `<prefix><8 hex digits>`.
    #[must_use]
    pub fn with_id_prefix(prefix: impl Into<String>) -> Self {
        Self::from_registry(Registry::new(prefix))
    }

    pub(crate) fn from_registry(registry: Registry) -> Self {
        Self {
            state: Mutex::new(registry),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.state.lock().unwrap_or_else(|poisoned| {
            // Plans mutate only after every check has passed; a panic during
            // an operation leaves the registry consistent.
            log::warn!("recovering coordinator state after a panic in a previous operation");
            self.state.clear_poison();
            poisoned.into_inner()
        })
    }

    /// Adds a guest to the registry.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the guest id is already registered.
    pub fn register_guest(&self, guest: Guest) -> Result<()> {
        log::debug!("registering guest {}", guest.id());
        self.lock().insert_guest(guest)
    }

    /// Adds a room to the pool.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the room id is already registered, the
    /// room is not `Available`, or its rate is zero.
    pub fn register_room(&self, room: Room) -> Result<()> {
        log::debug!("registering room {} ({}, {})", room.id(), room.category(), room.rate());
        self.lock().insert_room(room)
    }

    /// Books `room` for `guest` and returns the new reservation id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the guest or room is not registered
    /// - `ResourceUnavailable` if the room is reserved or in use
    /// - `IdentityExhausted` if no reservation ids are left
    pub fn book(&self, guest: &GuestId, room: &RoomId, stay: StayDates) -> Result<ReservationId> {
        let request = BookRequest::new(guest.clone(), room.clone(), stay);
        let mut registry = self.lock();
        let plan = BookPlan::new(&request).build_plan(&registry)?;
        let result = run(PlanExecutor::new(&mut registry), &plan)?;
        result.reservation.ok_or_else(|| Error::Validation {
            field: "plan".into(),
            message: "booking plan opened no reservation".into(),
        })
    }

    /// Marks the guest of a reservation as arrived.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id was never issued
    /// - `InvalidState` if the guest already checked in or the reservation
    ///   was cancelled or checked out
    pub fn check_in(&self, reservation: &ReservationId) -> Result<()> {
        let mut registry = self.lock();
        let plan = CheckInPlan::new(reservation).build_plan(&registry)?;
        run(PlanExecutor::new(&mut registry), &plan)?;
        Ok(())
    }

    /// Charges `rate × nights` through `payment`, then releases the room and
    /// retires the reservation.
    ///
    /// The payment capability is invoked while the coordinator lock is held.
    /// A decline changes nothing and the checkout may be retried.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id was never issued
    /// - `InvalidState` if the guest has not checked in or the reservation
    ///   was already retired
    /// - `PaymentFailed` if the capability declines
    pub fn check_out(
        &self,
        reservation: &ReservationId,
        payment: &dyn PaymentCapability,
    ) -> Result<Receipt> {
        let mut registry = self.lock();
        let plan = CheckOutPlan::new(reservation).build_plan(&registry)?;
        let result = run(PlanExecutor::new(&mut registry).with_payment(payment), &plan)?;
        result.receipt.ok_or_else(|| Error::Validation {
            field: "plan".into(),
            message: "checkout plan issued no receipt".into(),
        })
    }

    /// Cancels a reservation and releases its room, even mid-stay.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id was never issued
    /// - `InvalidState` if the reservation was already cancelled or checked out
    pub fn cancel(&self, reservation: &ReservationId) -> Result<()> {
        let mut registry = self.lock();
        let plan = CancelPlan::new(reservation).build_plan(&registry)?;
        run(PlanExecutor::new(&mut registry), &plan)?;
        Ok(())
    }

    /// Plans a booking without applying it.
    ///
    /// # Errors
    ///
    /// Same as [`book`](Self::book), minus `IdentityExhausted`.
    pub fn preview_book(
        &self,
        guest: &GuestId,
        room: &RoomId,
        stay: StayDates,
    ) -> Result<OperationPlan> {
        let request = BookRequest::new(guest.clone(), room.clone(), stay);
        BookPlan::new(&request).build_plan(&self.lock())
    }

    /// Plans a check-in without applying it.
    ///
    /// # Errors
    ///
    /// Same as [`check_in`](Self::check_in).
    pub fn preview_check_in(&self, reservation: &ReservationId) -> Result<OperationPlan> {
        CheckInPlan::new(reservation).build_plan(&self.lock())
    }

    /// Plans a checkout without charging or applying it.
    ///
    /// # Errors
    ///
    /// Same as [`check_out`](Self::check_out), minus `PaymentFailed`.
    pub fn preview_check_out(&self, reservation: &ReservationId) -> Result<OperationPlan> {
        CheckOutPlan::new(reservation).build_plan(&self.lock())
    }

    /// Plans a cancellation without applying it.
    ///
    /// # Errors
    ///
    /// Same as [`cancel`](Self::cancel).
    pub fn preview_cancel(&self, reservation: &ReservationId) -> Result<OperationPlan> {
        CancelPlan::new(reservation).build_plan(&self.lock())
    }

    /// Returns a snapshot of a guest.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the guest is not registered.
    pub fn guest(&self, id: &GuestId) -> Result<Guest> {
        self.lock().guest(id).cloned()
    }

    /// Returns a snapshot of a room.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the room is not registered.
    pub fn room(&self, id: &RoomId) -> Result<Room> {
        self.lock().room(id).cloned()
    }

    /// Returns the current status of a room.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the room is not registered.
    pub fn room_status(&self, id: &RoomId) -> Result<RoomStatus> {
        self.lock().room(id).map(Room::status)
    }

    /// Returns snapshots of every room, sorted by id.
    #[must_use]
    pub fn rooms(&self) -> Vec<Room> {
        self.lock().rooms().cloned().collect()
    }

    /// Returns a snapshot of an active reservation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for ids never issued and `InvalidState` for
    /// reservations that were cancelled or checked out.
    pub fn reservation(&self, id: &ReservationId) -> Result<Reservation> {
        self.lock().confirmed(id).cloned()
    }

    /// Returns snapshots of every active reservation, sorted by id.
    #[must_use]
    pub fn active_reservations(&self) -> Vec<Reservation> {
        self.lock().reservations().cloned().collect()
    }

    /// Returns the active reservation holding a room, if any.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the room is not registered.
    pub fn reservation_for_room(&self, room: &RoomId) -> Result<Option<Reservation>> {
        let registry = self.lock();
        registry.room(room)?;
        Ok(registry.reservation_for_room(room).cloned())
    }

    /// Returns the final snapshot of a cancelled or checked-out reservation.
    #[must_use]
    pub fn retired_reservation(&self, id: &ReservationId) -> Option<RetiredReservation> {
        self.lock().retired(id).cloned()
    }

    /// Returns what checking out `reservation` would charge.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`InvalidState` as [`reservation`](Self::reservation)
    /// does, and `InvalidAmount` if the total overflows.
    pub fn quote(&self, reservation: &ReservationId) -> Result<Money> {
        let registry = self.lock();
        let active = registry.confirmed(reservation)?;
        let rate = registry.room(active.room())?.rate();
        active.total_for(rate).ok_or_else(|| Error::InvalidAmount {
            value: format!("{rate} x {}", active.stay().nights()),
            reason: "stay total is too large".into(),
        })
    }

    /// Checks the occupancy invariants, returning one message per violation.
    ///
    /// An empty result means every `Reserved`/`InUse` room is held by exactly
    /// one confirmed reservation and every `Available` room by none.
    #[must_use]
    pub fn audit(&self) -> Vec<String> {
        self.lock().audit()
    }
}

fn run(mut executor: PlanExecutor<'_>, plan: &OperationPlan) -> Result<ExecutionResult> {
    log::debug!("{}", plan.description);
    let result = executor.execute(plan)?;
    for warning in &result.warnings {
        log::warn!("{warning}");
    }
    for action in &result.actions_taken {
        log::debug!("  done: {action}");
    }
    Ok(result)
}
