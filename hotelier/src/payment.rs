//! Payment capability boundary.
//!
//! The coordinator charges a guest at checkout through any
//! [`PaymentCapability`]. It never looks past the outcome: a decline is a
//! retriable business failure, not an error in the engine.

use serde::Serialize;

use crate::money::Money;
use crate::reservation::ReservationId;
use crate::room::RoomId;

/// Result of asking a capability to collect an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The amount was collected.
    Approved,
    /// The amount was not collected.
    Declined,
}

impl PaymentOutcome {
    /// Returns `true` for [`PaymentOutcome::Approved`].
    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl From<bool> for PaymentOutcome {
    fn from(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Declined
        }
    }
}

/// Something that can collect money from a guest.
///
/// # Examples
///
/// ```
/// use hotelier::{Money, PaymentCapability, PaymentOutcome};
///
/// struct Voucher(Money);
///
/// impl PaymentCapability for Voucher {
///     fn process(&self, amount: Money) -> PaymentOutcome {
///         (amount <= self.0).into()
///     }
/// }
///
/// let voucher = Voucher(Money::from_major(50));
/// assert!(voucher.process(Money::from_major(20)).is_approved());
/// assert!(!voucher.process(Money::from_major(80)).is_approved());
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait PaymentCapability {
    /// Attempts to collect `amount`.
    fn process(&self, amount: Money) -> PaymentOutcome;
}

/// Card-style payment. The card network is assumed to approve every charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayment {
    last_four: String,
}

impl CardPayment {
    /// Creates a card payment identified by the card's last four digits.
    #[must_use]
    pub fn new(last_four: impl Into<String>) -> Self {
        Self {
            last_four: last_four.into(),
        }
    }

    /// Returns the last four digits of the card.
    #[must_use]
    pub fn last_four(&self) -> &str {
        &self.last_four
    }
}

impl PaymentCapability for CardPayment {
    fn process(&self, amount: Money) -> PaymentOutcome {
        log::debug!("charging {amount} to card ending {}", self.last_four);
        PaymentOutcome::Approved
    }
}

/// Cash-style payment. Approves when the tendered cash covers the charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashPayment {
    tendered: Money,
}

impl CashPayment {
    /// Creates a cash payment holding `tendered`.
    #[must_use]
    pub const fn new(tendered: Money) -> Self {
        Self { tendered }
    }

    /// Returns the tendered amount.
    #[must_use]
    pub const fn tendered(&self) -> Money {
        self.tendered
    }
}

impl PaymentCapability for CashPayment {
    fn process(&self, amount: Money) -> PaymentOutcome {
        (amount <= self.tendered).into()
    }
}

/// Proof of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// The reservation that was checked out.
    pub reservation: ReservationId,
    /// The room that was released.
    pub room: RoomId,
    /// Nights charged.
    pub nights: u32,
    /// Amount collected (`rate × nights`).
    pub amount: Money,
}
