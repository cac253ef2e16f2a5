//! Property-based test generators using proptest.
//!
//! Strategies generate random feed data that maintains the invariants the
//! engine relies on, most importantly strictly increasing positions.

use crate::fixtures;
use addrsync_feed::{AddressSnapshot, AddressStatus, ChangeRecord, ChangeType, EmbedIntent,
    GeometryPoint};
use proptest::prelude::*;

/// Strategy for generating change types.
pub fn change_type_strategy() -> impl Strategy<Value = ChangeType> {
    prop_oneof![
        Just(ChangeType::Registered),
        Just(ChangeType::Approved),
        Just(ChangeType::Corrected),
        Just(ChangeType::Retired),
        Just(ChangeType::Removed),
    ]
}

/// Strategy for generating address statuses.
pub fn status_strategy() -> impl Strategy<Value = AddressStatus> {
    prop_oneof![
        Just(AddressStatus::Proposed),
        Just(AddressStatus::Current),
        Just(AddressStatus::Retired),
    ]
}

/// Strategy for generating address snapshots.
pub fn snapshot_strategy() -> impl Strategy<Value = AddressSnapshot> {
    (
        "[1-9][0-9]{0,2}",
        prop::option::of("[A-D]"),
        1u64..10_000,
        prop::option::of("[1-9][0-9]{3}"),
        prop::option::of((0.0f64..300_000.0, 0.0f64..300_000.0)),
        any::<bool>(),
        status_strategy(),
    )
        .prop_map(
            |(house_number, box_number, street_name_id, postal_code, point, assigned, status)| {
                let mut snapshot = AddressSnapshot::new(house_number, street_name_id, status);
                snapshot.box_number = box_number;
                snapshot.postal_code = postal_code;
                snapshot.geometry = point.map(|(x, y)| GeometryPoint::new(x, y));
                snapshot.officially_assigned = assigned;
                snapshot
            },
        )
}

/// Strategy for generating change records with position 0.
///
/// Positions are assigned by the log; pair with
/// [`ascending_positions_strategy`] to build a seeded feed.
pub fn record_strategy() -> impl Strategy<Value = ChangeRecord> {
    (
        1u64..1_000_000,
        change_type_strategy(),
        prop::option::of("<[a-zA-Z]{4,16}/>"),
        prop::option::of(snapshot_strategy()),
        any::<bool>(),
    )
        .prop_map(|(id, change_type, event, address, complete)| {
            let mut record = ChangeRecord::new(id, change_type, fixtures::timestamp());
            record.event = event;
            record.address = address;
            record.is_complete = complete;
            record
        })
}

/// Strategy for generating strictly increasing position vectors with gaps.
pub fn ascending_positions_strategy(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..=5, 0..max_len).prop_map(|gaps| {
        let mut position = 0u64;
        gaps.into_iter()
            .map(|gap| {
                position += gap;
                position
            })
            .collect()
    })
}

/// Strategy for generating embed intents, including both raw strings and
/// the absent-parameter case.
pub fn embed_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("event".to_string())),
        Just(Some("OBJECT".to_string())),
        Just(Some("event,object".to_string())),
        Just(Some("Object Event".to_string())),
        Just(Some("unrelated".to_string())),
    ]
}

/// The intent an embed string is expected to parse to.
pub fn expected_intent(raw: Option<&str>) -> EmbedIntent {
    let lowered = raw.unwrap_or_default().to_ascii_lowercase();
    EmbedIntent {
        event: lowered.contains("event"),
        object: lowered.contains("object"),
    }
}
