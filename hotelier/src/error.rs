//! Error types for the hotelier library.
//!
//! Every coordinator operation reports failure through [`Error`]. The four
//! business outcomes (`NotFound`, `ResourceUnavailable`, `InvalidState` and
//! `PaymentFailed`) are expected results a caller should handle; the remaining
//! variants cover construction, configuration, and I/O problems.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::money::Money;
use crate::reservation::ReservationId;
use crate::room::{RoomId, RoomStatus};

/// Result type alias for operations that may fail with a hotelier error.
///
/// # Examples
///
/// ```
/// use hotelier::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of entity a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A registered guest.
    Guest,
    /// A room in the pool.
    Room,
    /// An active reservation.
    Reservation,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => write!(f, "guest"),
            Self::Room => write!(f, "room"),
            Self::Reservation => write!(f, "reservation"),
        }
    }
}

/// A room lifecycle action, used to describe rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomAction {
    /// `Available -> Reserved`.
    Reserve,
    /// `Reserved -> InUse`.
    Arrive,
    /// `Reserved | InUse -> Available`.
    Release,
}

impl fmt::Display for RoomAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserve => write!(f, "reserve"),
            Self::Arrive => write!(f, "arrive"),
            Self::Release => write!(f, "release"),
        }
    }
}

/// The main error type for the hotelier library.
#[derive(Debug, Error)]
pub enum Error {
    /// An unknown guest, room, or reservation id was supplied.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What kind of entity was looked up.
        kind: EntityKind,
        /// The id that was not found.
        id: String,
    },

    /// The room is not available for booking.
    #[error("room {room} is unavailable (currently {status})")]
    ResourceUnavailable {
        /// The room that was requested.
        room: RoomId,
        /// The status the room was observed in.
        status: RoomStatus,
    },

    /// The reservation is in a lifecycle stage incompatible with the operation.
    #[error("reservation {reservation} is in an invalid state: {reason}")]
    InvalidState {
        /// The reservation the operation targeted.
        reservation: ReservationId,
        /// Why the operation was rejected.
        reason: String,
    },

    /// The payment capability declined the charge.
    #[error("payment of {amount} for reservation {reservation} was declined")]
    PaymentFailed {
        /// The reservation being checked out.
        reservation: ReservationId,
        /// The amount that was declined.
        amount: Money,
    },

    /// A room state machine transition was attempted from the wrong state.
    #[error("room {room} cannot {action} while {from}")]
    InvalidTransition {
        /// The room involved.
        room: RoomId,
        /// The state the room was in.
        from: RoomStatus,
        /// The transition that was attempted.
        action: RoomAction,
    },

    /// The requested stay does not end after it starts.
    #[error("invalid stay {check_in} to {check_out}: check-out must be after check-in")]
    InvalidStay {
        /// Requested arrival date.
        check_in: chrono::NaiveDate,
        /// Requested departure date.
        check_out: chrono::NaiveDate,
    },

    /// A monetary amount could not be parsed or is out of range.
    #[error("invalid amount {value}: {reason}")]
    InvalidAmount {
        /// The rejected input.
        value: String,
        /// The reason the amount is invalid.
        reason: String,
    },

    /// The reservation identity sequence has no values left.
    #[error("reservation identity space exhausted")]
    IdentityExhausted,

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Rendering output failed.
    #[error("output error: {0}")]
    Output(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::money::InvalidAmountError> for Error {
    fn from(err: crate::money::InvalidAmountError) -> Self {
        Self::InvalidAmount {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Builds a `NotFound` error for the given entity.
    pub(crate) fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Check if error indicates an unknown id.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::error::{EntityKind, Error};
    ///
    /// let err = Error::NotFound { kind: EntityKind::Room, id: "101".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the caller may retry the same operation later.
    ///
    /// Declined payments and unavailable rooms are business outcomes that can
    /// change without any fix on the caller's side.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::PaymentFailed { .. } | Self::ResourceUnavailable { .. }
        )
    }
}
