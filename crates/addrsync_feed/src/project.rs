//! Projection of change records into feed items.

use crate::embed::EmbedIntent;
use crate::item::{FeedItem, ItemBase};
use crate::record::ChangeRecord;

/// Projects a record into the variant selected by the embed intent.
///
/// A pure mapping step: for any record and any intent exactly one variant
/// is produced, its shape flags mirror the intent, and only the fields of
/// the selected facets are copied out of the record. Sources that prune
/// unrequested facet payloads before handing records over produce the same
/// result, since the facets those payloads feed are not selected.
pub fn project(record: &ChangeRecord, intent: EmbedIntent) -> FeedItem {
    let base = ItemBase::from_record(record);
    match (intent.event, intent.object) {
        (false, false) => FeedItem::Base { base },
        (true, false) => FeedItem::WithEvent {
            base,
            event: record.event.clone(),
        },
        (false, true) => FeedItem::WithAddress {
            base,
            address: record.address.clone(),
        },
        (true, true) => FeedItem::Full {
            base,
            event: record.event.clone(),
            address: record.address.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AddressSnapshot, AddressStatus, ChangeType};
    use chrono::DateTime;

    fn record() -> ChangeRecord {
        let mut record = ChangeRecord::new(
            7,
            ChangeType::Registered,
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        )
        .with_event("<AddressWasRegistered/>")
        .with_address(AddressSnapshot::new("12", 900, AddressStatus::Current));
        record.position = 5;
        record
    }

    #[test]
    fn flags_mirror_intent() {
        let record = record();
        for (event, object) in [(false, false), (true, false), (false, true), (true, true)] {
            let item = project(&record, EmbedIntent { event, object });
            assert_eq!(item.contains_event(), event);
            assert_eq!(item.contains_object(), object);
            assert_eq!(item.position(), 5);
        }
    }

    #[test]
    fn base_shape_copies_base_fields_only() {
        let item = project(&record(), EmbedIntent::none());

        let base = item.base();
        assert_eq!(base.position, 5);
        assert_eq!(base.persistent_local_id, 7);
        assert_eq!(base.change_type, ChangeType::Registered);
        assert!(matches!(item, FeedItem::Base { .. }));
    }

    #[test]
    fn event_shape_carries_the_event() {
        let item = project(
            &record(),
            EmbedIntent {
                event: true,
                object: false,
            },
        );

        match item {
            FeedItem::WithEvent { event, .. } => {
                assert_eq!(event.as_deref(), Some("<AddressWasRegistered/>"));
            }
            other => panic!("expected WithEvent, got {other:?}"),
        }
    }

    #[test]
    fn object_shape_carries_the_snapshot() {
        let item = project(
            &record(),
            EmbedIntent {
                event: false,
                object: true,
            },
        );

        match item {
            FeedItem::WithAddress { address, .. } => {
                let address = address.expect("live entity has a snapshot");
                assert_eq!(address.house_number, "12");
                assert_eq!(address.street_name_id, 900);
            }
            other => panic!("expected WithAddress, got {other:?}"),
        }
    }

    #[test]
    fn full_shape_carries_both_facets() {
        let item = project(&record(), EmbedIntent::both());

        match item {
            FeedItem::Full { event, address, .. } => {
                assert!(event.is_some());
                assert!(address.is_some());
            }
            other => panic!("expected Full, got {other:?}"),
        }
    }

    #[test]
    fn gone_entity_projects_empty_facets() {
        let record = ChangeRecord::new(
            9,
            ChangeType::Removed,
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        );

        let item = project(&record, EmbedIntent::both());
        match item {
            FeedItem::Full { event, address, .. } => {
                assert!(event.is_none());
                assert!(address.is_none());
            }
            other => panic!("expected Full, got {other:?}"),
        }
    }
}
