//! Configuration validation.
//!
//! Types already guarantee non-empty room and guest ids and well-formed
//! amounts; this module checks the cross-field rules.

use std::collections::HashSet;

use crate::config::schema::{GuestDefinition, HotelConfig, RoomDefinition};
use crate::error::{Error, Result};

/// Longest accepted reservation id prefix.
pub const MAX_PREFIX_LEN: usize = 8;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use hotelier::config::{ConfigValidator, HotelConfig};
///
/// ConfigValidator::validate(&HotelConfig::default()).unwrap();
///
/// let bad = HotelConfig { currency: Some("dollars".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the first offending field.
    pub fn validate(config: &HotelConfig) -> Result<()> {
        if let Some(ref name) = config.name {
            Self::validate_text("name", name)?;
        }

        if let Some(ref prefix) = config.reservation_id_prefix {
            Self::validate_prefix(prefix)?;
        }

        if let Some(ref currency) = config.currency {
            Self::validate_currency(currency)?;
        }

        Self::validate_unique_ids(config)?;
        Self::validate_rooms(&config.rooms)?;
        Self::validate_guests(&config.guests)?;

        Ok(())
    }

    fn validate_text(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.len() > 255 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot exceed 255 characters".into(),
            });
        }

        Ok(())
    }

    fn validate_prefix(prefix: &str) -> Result<()> {
        if prefix.is_empty()
            || prefix.len() > MAX_PREFIX_LEN
            || !prefix.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(Error::Validation {
                field: "reservation_id_prefix".into(),
                message: format!("Must be 1-{MAX_PREFIX_LEN} ASCII letters or digits, got '{prefix}'"),
            });
        }
        Ok(())
    }

    fn validate_currency(currency: &str) -> Result<()> {
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(Error::Validation {
                field: "currency".into(),
                message: format!("Must be a three-letter upper-case code, got '{currency}'"),
            });
        }
        Ok(())
    }

    /// Rejects room or guest ids listed twice in one configuration.
    ///
    /// Merging folds entries by id, so this runs on every source before the
    /// merge as well as on the merged result.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error on `rooms` or `guests`.
    pub fn validate_unique_ids(config: &HotelConfig) -> Result<()> {
        let mut rooms = HashSet::new();
        if let Some(room) = config.rooms.iter().find(|r| !rooms.insert(&r.id)) {
            return Err(Error::Validation {
                field: "rooms".into(),
                message: format!("Duplicate room id '{}'", room.id),
            });
        }

        let mut guests = HashSet::new();
        if let Some(guest) = config.guests.iter().find(|g| !guests.insert(&g.id)) {
            return Err(Error::Validation {
                field: "guests".into(),
                message: format!("Duplicate guest id '{}'", guest.id),
            });
        }
        Ok(())
    }

    fn validate_rooms(rooms: &[RoomDefinition]) -> Result<()> {
        for room in rooms {
            if room.rate.is_zero() {
                return Err(Error::Validation {
                    field: format!("rooms.{}.rate", room.id),
                    message: "Rate must be greater than 0".into(),
                });
            }
        }
        Ok(())
    }

    fn validate_guests(guests: &[GuestDefinition]) -> Result<()> {
        for guest in guests {
            Self::validate_text(&format!("guests.{}.name", guest.id), &guest.name)?;
            if let Some(ref email) = guest.email {
                if !email.contains('@') {
                    return Err(Error::Validation {
                        field: format!("guests.{}.email", guest.id),
                        message: format!("'{email}' is not an email address"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::GuestId;
    use crate::money::Money;
    use crate::room::{RoomCategory, RoomId};

    fn room(id: &str, rate: Money) -> RoomDefinition {
        RoomDefinition {
            id: RoomId::new(id).unwrap(),
            category: RoomCategory::Deluxe,
            rate,
        }
    }

    fn guest(id: &str, name: &str) -> GuestDefinition {
        GuestDefinition {
            id: GuestId::new(id).unwrap(),
            name: name.into(),
            email: None,
            phone: None,
        }
    }

    fn field_of(result: Result<()>) -> String {
        match result {
            Err(Error::Validation { field, .. }) => field,
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_config() {
        assert!(ConfigValidator::validate(&HotelConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_name() {
        let config = HotelConfig {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "name");
    }

    #[test]
    fn test_validate_prefix() {
        for bad in ["", "TOOLONGPREFIX", "RE-S", "R S"] {
            let config = HotelConfig {
                reservation_id_prefix: Some(bad.into()),
                ..Default::default()
            };
            assert_eq!(
                field_of(ConfigValidator::validate(&config)),
                "reservation_id_prefix",
                "prefix {bad:?}"
            );
        }

        let config = HotelConfig {
            reservation_id_prefix: Some("BK2".into()),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_currency() {
        for bad in ["usd", "US", "EURO", "U$D"] {
            let config = HotelConfig {
                currency: Some(bad.into()),
                ..Default::default()
            };
            assert_eq!(field_of(ConfigValidator::validate(&config)), "currency");
        }
    }

    #[test]
    fn test_validate_duplicate_room() {
        let config = HotelConfig {
            rooms: vec![
                room("101", Money::from_major(10)),
                room("101", Money::from_major(20)),
            ],
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "rooms");
    }

    #[test]
    fn test_validate_zero_rate() {
        let config = HotelConfig {
            rooms: vec![room("101", Money::ZERO)],
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "rooms.101.rate");
    }

    #[test]
    fn test_validate_guests() {
        let config = HotelConfig {
            guests: vec![guest("g1", "A"), guest("g1", "B")],
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "guests");

        let config = HotelConfig {
            guests: vec![guest("g1", "")],
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "guests.g1.name");

        let mut with_email = guest("g2", "C");
        with_email.email = Some("c.example.com".into());
        let config = HotelConfig {
            guests: vec![with_email],
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "guests.g2.email");
    }
}
