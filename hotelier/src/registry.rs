//! Lookup tables and reservation identity issuance.
//!
//! The registry is plain data: it is owned by the coordinator and only ever
//! touched while the coordinator's lock is held.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{EntityKind, Error, Result};
use crate::guest::{Guest, GuestId};
use crate::reservation::{Reservation, ReservationId};
use crate::room::{Room, RoomId, RoomStatus};

/// Prefix used for reservation ids when none is configured.
pub const DEFAULT_ID_PREFIX: &str = "RES";

/// Monotonic reservation id sequence.
#[derive(Debug)]
pub(crate) struct IdSequence {
    prefix: String,
    next: u64,
}

impl IdSequence {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub(crate) fn starting_at(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next,
        }
    }

    /// Issues the next id. `u64::MAX` is never handed out; reaching it means
    /// the sequence is exhausted.
    pub(crate) fn issue(&mut self) -> Result<ReservationId> {
        let current = self.next;
        self.next = current.checked_add(1).ok_or(Error::IdentityExhausted)?;
        Ok(ReservationId::new(&self.prefix, current))
    }
}

/// Why a reservation left the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Retirement {
    /// The reservation was cancelled.
    Cancelled,
    /// The guest checked out and paid.
    CheckedOut,
}

impl fmt::Display for Retirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "cancelled"),
            Self::CheckedOut => write!(f, "checked out"),
        }
    }
}

/// A reservation that is no longer active, kept so that late operations on
/// its id report `InvalidState` rather than `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RetiredReservation {
    /// Final snapshot of the reservation.
    pub reservation: Reservation,
    /// How it left the active index.
    pub retirement: Retirement,
}

/// Guests, rooms, active reservations, and the id sequence.
///
/// Retired reservations are never evicted. The history grows by one entry per
/// cancellation or check-out for as long as the registry lives.
#[derive(Debug)]
pub(crate) struct Registry {
    guests: HashMap<GuestId, Guest>,
    rooms: BTreeMap<RoomId, Room>,
    active: BTreeMap<ReservationId, Reservation>,
    retired: HashMap<ReservationId, RetiredReservation>,
    ids: IdSequence,
}

impl Registry {
    pub(crate) fn new(id_prefix: impl Into<String>) -> Self {
        Self::with_sequence(IdSequence::new(id_prefix))
    }

    pub(crate) fn with_sequence(ids: IdSequence) -> Self {
        Self {
            guests: HashMap::new(),
            rooms: BTreeMap::new(),
            active: BTreeMap::new(),
            retired: HashMap::new(),
            ids,
        }
    }

    pub(crate) fn insert_guest(&mut self, guest: Guest) -> Result<()> {
        if self.guests.contains_key(guest.id()) {
            return Err(Error::Validation {
                field: "guest_id".into(),
                message: format!("guest {} is already registered", guest.id()),
            });
        }
        self.guests.insert(guest.id().clone(), guest);
        Ok(())
    }

    pub(crate) fn insert_room(&mut self, room: Room) -> Result<()> {
        if self.rooms.contains_key(room.id()) {
            return Err(Error::Validation {
                field: "room_id".into(),
                message: format!("room {} is already registered", room.id()),
            });
        }
        if room.status() != RoomStatus::Available {
            return Err(Error::Validation {
                field: "status".into(),
                message: format!("room {} must be registered as available", room.id()),
            });
        }
        if room.rate().is_zero() {
            return Err(Error::Validation {
                field: "rate".into(),
                message: format!("room {} must have a rate greater than 0", room.id()),
            });
        }
        self.rooms.insert(room.id().clone(), room);
        Ok(())
    }

    pub(crate) fn guest(&self, id: &GuestId) -> Result<&Guest> {
        self.guests
            .get(id)
            .ok_or_else(|| Error::not_found(EntityKind::Guest, id))
    }

    pub(crate) fn room(&self, id: &RoomId) -> Result<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| Error::not_found(EntityKind::Room, id))
    }

    pub(crate) fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub(crate) fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.active.values()
    }

    pub(crate) fn retired(&self, id: &ReservationId) -> Option<&RetiredReservation> {
        self.retired.get(id)
    }

    /// Looks up an active reservation.
    ///
    /// Retired ids yield `InvalidState`; ids never issued yield `NotFound`.
    pub(crate) fn confirmed(&self, id: &ReservationId) -> Result<&Reservation> {
        if let Some(reservation) = self.active.get(id) {
            return Ok(reservation);
        }
        match self.retired.get(id) {
            Some(retired) => Err(Error::InvalidState {
                reservation: id.clone(),
                reason: format!("reservation was already {}", retired.retirement),
            }),
            None => Err(Error::not_found(EntityKind::Reservation, id)),
        }
    }

    pub(crate) fn reservation_for_room(&self, room: &RoomId) -> Option<&Reservation> {
        self.active.values().find(|r| r.room() == room)
    }

    pub(crate) fn issue_id(&mut self) -> Result<ReservationId> {
        self.ids.issue()
    }

    pub(crate) fn room_mut(&mut self, id: &RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| Error::not_found(EntityKind::Room, id))
    }

    /// Borrows an active reservation together with its room.
    pub(crate) fn reservation_and_room_mut(
        &mut self,
        id: &ReservationId,
    ) -> Result<(&mut Reservation, &mut Room)> {
        let reservation = self
            .active
            .get_mut(id)
            .ok_or_else(|| Error::not_found(EntityKind::Reservation, id))?;
        let room = self
            .rooms
            .get_mut(reservation.room())
            .ok_or_else(|| Error::not_found(EntityKind::Room, reservation.room()))?;
        Ok((reservation, room))
    }

    pub(crate) fn insert_reservation(&mut self, reservation: Reservation) {
        self.active.insert(reservation.id().clone(), reservation);
    }

    /// Moves a reservation from the active index to the retired set.
    pub(crate) fn retire(&mut self, id: &ReservationId, retirement: Retirement) -> Result<()> {
        let reservation = self
            .active
            .remove(id)
            .ok_or_else(|| Error::not_found(EntityKind::Reservation, id))?;
        self.retired.insert(
            id.clone(),
            RetiredReservation {
                reservation,
                retirement,
            },
        );
        Ok(())
    }

    /// Checks the occupancy invariants and returns a description of each
    /// violation found.
    pub(crate) fn audit(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let mut holders: HashMap<&RoomId, Vec<&ReservationId>> = HashMap::new();

        for reservation in self.active.values() {
            if !reservation.is_confirmed() {
                violations.push(format!(
                    "active reservation {} is {}",
                    reservation.id(),
                    reservation.status()
                ));
            }
            holders
                .entry(reservation.room())
                .or_default()
                .push(reservation.id());
        }

        for room in self.rooms.values() {
            let held_by = holders.get(room.id()).map_or(0, Vec::len);
            match (room.status(), held_by) {
                (RoomStatus::Available, 0) | (RoomStatus::Reserved | RoomStatus::InUse, 1) => {}
                (status, count) => violations.push(format!(
                    "room {} is {status} but held by {count} active reservation(s)",
                    room.id()
                )),
            }
        }

        for room in holders.keys() {
            if !self.rooms.contains_key(*room) {
                violations.push(format!("active reservation references unknown room {room}"));
            }
        }

        violations
    }
}
