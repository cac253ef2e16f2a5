//! Result variants returned by the feed.
//!
//! A feed item is a read-only projection of exactly one [`ChangeRecord`],
//! shaped by the caller's embed intent. The four shapes are modelled as a
//! sum type so that which fields exist is decided by the discriminant
//! rather than by nullable fields: an unselected facet has no field to
//! populate, and the shape flags cannot change after construction.

use crate::record::{AddressSnapshot, ChangeRecord, ChangeType};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The base facet carried by every feed item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBase {
    /// Position in the change log.
    pub position: u64,
    /// Identity of the changed address.
    pub persistent_local_id: u64,
    /// Type of change.
    pub change_type: ChangeType,
    /// When the change was recorded.
    pub recorded_at: DateTime<Utc>,
    /// When the record was last changed.
    pub last_changed_at: DateTime<Utc>,
    /// Whether the record carries all attributes of the change.
    pub is_complete: bool,
    /// Organisation that originated the change.
    pub organisation: Option<String>,
    /// Plan classification of the change.
    pub plan: Option<String>,
}

impl ItemBase {
    /// Copies the base facet out of a record.
    pub fn from_record(record: &ChangeRecord) -> Self {
        Self {
            position: record.position,
            persistent_local_id: record.persistent_local_id,
            change_type: record.change_type,
            recorded_at: record.recorded_at,
            last_changed_at: record.last_changed_at,
            is_complete: record.is_complete,
            organisation: record.organisation.clone(),
            plan: record.plan.clone(),
        }
    }
}

/// A single feed result, shaped by the caller's embed intent.
///
/// Serialization is untagged: the output of a `Base` item contains no
/// `event` or `address` key at all, so an unselected facet is absent from
/// the wire shape rather than null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeedItem {
    /// Base facet only.
    Base {
        /// The base facet.
        #[serde(flatten)]
        base: ItemBase,
    },
    /// Base facet plus the serialized triggering event.
    WithEvent {
        /// The base facet.
        #[serde(flatten)]
        base: ItemBase,
        /// Serialized triggering event; `None` when the record carries none.
        event: Option<String>,
    },
    /// Base facet plus the current address attributes.
    WithAddress {
        /// The base facet.
        #[serde(flatten)]
        base: ItemBase,
        /// Current attributes; `None` when the address no longer exists.
        address: Option<AddressSnapshot>,
    },
    /// Base facet plus both the event and the address attributes.
    Full {
        /// The base facet.
        #[serde(flatten)]
        base: ItemBase,
        /// Serialized triggering event; `None` when the record carries none.
        event: Option<String>,
        /// Current attributes; `None` when the address no longer exists.
        address: Option<AddressSnapshot>,
    },
}

impl FeedItem {
    /// Returns the base facet.
    pub fn base(&self) -> &ItemBase {
        match self {
            FeedItem::Base { base }
            | FeedItem::WithEvent { base, .. }
            | FeedItem::WithAddress { base, .. }
            | FeedItem::Full { base, .. } => base,
        }
    }

    /// Returns the item's position in the change log.
    pub fn position(&self) -> u64 {
        self.base().position
    }

    /// Returns true if the event facet was selected.
    pub fn contains_event(&self) -> bool {
        matches!(self, FeedItem::WithEvent { .. } | FeedItem::Full { .. })
    }

    /// Returns true if the object facet was selected.
    pub fn contains_object(&self) -> bool {
        matches!(self, FeedItem::WithAddress { .. } | FeedItem::Full { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AddressStatus;

    fn base() -> ItemBase {
        ItemBase {
            position: 3,
            persistent_local_id: 7,
            change_type: ChangeType::Registered,
            recorded_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            last_changed_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            is_complete: true,
            organisation: None,
            plan: None,
        }
    }

    #[test]
    fn shape_flags_follow_discriminant() {
        let item = FeedItem::Base { base: base() };
        assert!(!item.contains_event());
        assert!(!item.contains_object());

        let item = FeedItem::WithEvent {
            base: base(),
            event: Some("<e/>".into()),
        };
        assert!(item.contains_event());
        assert!(!item.contains_object());

        let item = FeedItem::WithAddress {
            base: base(),
            address: None,
        };
        assert!(!item.contains_event());
        assert!(item.contains_object());

        let item = FeedItem::Full {
            base: base(),
            event: None,
            address: None,
        };
        assert!(item.contains_event());
        assert!(item.contains_object());
    }

    #[test]
    fn position_accessor() {
        let item = FeedItem::Base { base: base() };
        assert_eq!(item.position(), 3);
    }

    #[test]
    fn unselected_facets_absent_from_output() {
        let item = FeedItem::Base { base: base() };
        let json = serde_json::to_value(&item).unwrap();

        assert!(json.get("position").is_some());
        assert!(json.get("event").is_none());
        assert!(json.get("address").is_none());
    }

    #[test]
    fn selected_facets_present_even_when_empty() {
        let item = FeedItem::Full {
            base: base(),
            event: None,
            address: None,
        };
        let json = serde_json::to_value(&item).unwrap();

        // The facet keys exist; their values are null for a gone entity.
        assert!(json.get("event").is_some());
        assert!(json.get("address").is_some());
        assert!(json["event"].is_null());
        assert!(json["address"].is_null());
    }

    #[test]
    fn address_facet_serializes_snapshot() {
        let item = FeedItem::WithAddress {
            base: base(),
            address: Some(AddressSnapshot::new("12", 900, AddressStatus::Current)),
        };
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["address"]["house_number"], "12");
        assert_eq!(json["address"]["street_name_id"], 900);
    }
}
