//! Monetary amounts.
//!
//! Amounts are stored as an integer count of minor units (cents) so that
//! `rate × nights` is exact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative amount of money in minor units.
///
/// # Examples
///
/// ```
/// use hotelier::Money;
///
/// let rate = Money::from_major(100);
/// assert_eq!(rate.minor_units(), 10_000);
/// assert_eq!(rate.to_string(), "100.00");
///
/// let parsed: Money = "149.5".parse().unwrap();
/// assert_eq!(parsed, Money::from_minor(14_950));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from minor units (cents).
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Creates an amount from whole major units.
    ///
    /// Saturates at the largest representable amount.
    #[must_use]
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(100))
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a count (e.g. nights), returning `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::Money;
    ///
    /// assert_eq!(Money::from_major(100).checked_mul(2), Some(Money::from_major(200)));
    /// assert_eq!(Money::from_minor(u64::MAX).checked_mul(2), None);
    /// ```
    #[must_use]
    pub fn checked_mul(self, count: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(count)).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Error type for unparseable amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAmountError {
    /// The rejected input.
    pub value: String,
    /// The reason the amount is invalid.
    pub reason: String,
}

impl InvalidAmountError {
    fn new(value: &str, reason: &str) -> Self {
        Self {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for InvalidAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid amount {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidAmountError {}

impl FromStr for Money {
    type Err = InvalidAmountError;

    /// Parses `"120"`, `"120.5"` or `"120.50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, ""),
        };

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidAmountError::new(s, "expected digits before the decimal point"));
        }
        if minor.len() > 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidAmountError::new(s, "at most two decimal digits are allowed"));
        }

        let major: u64 = major
            .parse()
            .map_err(|_| InvalidAmountError::new(s, "amount is too large"))?;
        let minor: u64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<u64>().unwrap_or(0) * 10,
            _ => minor.parse().unwrap_or(0),
        };

        major
            .checked_mul(100)
            .and_then(|m| m.checked_add(minor))
            .map(Self)
            .ok_or_else(|| InvalidAmountError::new(s, "amount is too large"))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        // Accept `rate: 100`, `rate: 89.99` and `rate: "89.99"`.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Whole(u64),
            Decimal(f64),
            Text(String),
        }

        match Helper::deserialize(deserializer)? {
            Helper::Whole(major) => major
                .checked_mul(100)
                .map(Money)
                .ok_or_else(|| D::Error::custom(format!("amount too large: {major}"))),
            Helper::Decimal(value) => value.to_string().parse().map_err(D::Error::custom),
            Helper::Text(s) => s.parse().map_err(D::Error::custom),
        }
    }
}
