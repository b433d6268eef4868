//! Configuration merging and precedence handling.
//!
//! Scalar settings from a higher-precedence source replace lower ones.
//! Rooms and guests are merged by id: a later definition replaces an earlier
//! one in place, new ids are appended.

use crate::config::loader::ConfigSource;
use crate::config::schema::HotelConfig;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hotelier::config::{ConfigMerger, HotelConfig};
///
/// let low = HotelConfig { name: Some("low".to_string()), ..Default::default() };
/// let high = HotelConfig { name: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.name, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> HotelConfig {
        let mut result = HotelConfig::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut HotelConfig, source: &HotelConfig) {
        if source.name.is_some() {
            target.name.clone_from(&source.name);
        }

        if source.reservation_id_prefix.is_some() {
            target
                .reservation_id_prefix
                .clone_from(&source.reservation_id_prefix);
        }

        if source.currency.is_some() {
            target.currency.clone_from(&source.currency);
        }

        for room in &source.rooms {
            match target.rooms.iter_mut().find(|r| r.id == room.id) {
                Some(existing) => existing.clone_from(room),
                None => target.rooms.push(room.clone()),
            }
        }

        for guest in &source.guests {
            match target.guests.iter_mut().find(|g| g.id == guest.id) {
                Some(existing) => existing.clone_from(guest),
                None => target.guests.push(guest.clone()),
            }
        }
    }
}
