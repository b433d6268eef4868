//! Guests (the parties that request rooms).
//!
//! A guest is immutable once built. The registry owns guests and
//! reservations refer to them by [`GuestId`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::reservation::{IdRepr, ValidationError};

/// Identifier of a registered guest.
///
/// # Examples
///
/// ```
/// use hotelier::GuestId;
///
/// let id = GuestId::new("g-001").unwrap();
/// assert_eq!(format!("{id}"), "g-001");
/// assert!(GuestId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct GuestId(String);

impl GuestId {
    /// Creates a guest id, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty after trimming.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "guest_id".into(),
                message: "guest id must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for GuestId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IdRepr::deserialize(deserializer)?;
        Self::new(String::from(raw)).map_err(serde::de::Error::custom)
    }
}

impl From<GuestId> for String {
    fn from(id: GuestId) -> Self {
        id.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered guest with display name and contact details.
///
/// # Examples
///
/// ```
/// use hotelier::{Guest, GuestId};
///
/// let guest = Guest::builder(GuestId::new("g1").unwrap(), "Ada Lovelace")
///     .email(Some("ada@example.com".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(guest.name(), "Ada Lovelace");
/// assert_eq!(guest.email(), Some("ada@example.com"));
/// assert_eq!(guest.phone(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guest {
    id: GuestId,
    name: String,
    email: Option<String>,
    phone: Option<String>,
}

impl Guest {
    /// Creates a new guest builder.
    #[must_use]
    pub fn builder(id: GuestId, name: impl Into<String>) -> GuestBuilder {
        GuestBuilder {
            id,
            name: name.into(),
            email: None,
            phone: None,
        }
    }

    /// Returns the guest id.
    #[must_use]
    pub const fn id(&self) -> &GuestId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Builder for creating `Guest` instances.
#[derive(Debug)]
pub struct GuestBuilder {
    id: GuestId,
    name: String,
    email: Option<String>,
    phone: Option<String>,
}

impl GuestBuilder {
    /// Sets the email address.
    ///
    /// The value will be trimmed of leading/trailing whitespace.
    #[must_use]
    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email.map(|e| e.trim().to_string());
        self
    }

    /// Sets the phone number.
    ///
    /// The value will be trimmed of leading/trailing whitespace.
    #[must_use]
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone.map(|p| p.trim().to_string());
        self
    }

    /// Builds the guest.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    /// - The email is provided but empty or missing an `@`
    /// - The phone is provided but empty
    pub fn build(self) -> Result<Guest, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        if let Some(ref email) = self.email {
            if email.is_empty() || !email.contains('@') {
                return Err(ValidationError {
                    field: "email".into(),
                    message: format!("'{email}' is not an email address"),
                });
            }
        }

        if let Some(ref phone) = self.phone {
            if phone.is_empty() {
                return Err(ValidationError {
                    field: "phone".into(),
                    message: "phone must be non-empty after trimming whitespace".into(),
                });
            }
        }

        Ok(Guest {
            id: self.id,
            name,
            email: self.email,
            phone: self.phone,
        })
    }
}
