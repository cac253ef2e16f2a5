//! Deterministic test fixtures.
//!
//! Every fixture uses a fixed timestamp so that repeated test runs and
//! serialized snapshots compare equal.

use addrsync_feed::{AddressSnapshot, AddressStatus, ChangeRecord, ChangeType, GeometryPoint,
    PositionMethod, PositionSpecification};
use chrono::{DateTime, Utc};

/// The fixed timestamp all fixtures carry.
pub fn timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

/// A complete live-address snapshot.
pub fn snapshot() -> AddressSnapshot {
    AddressSnapshot::new("12", 900, AddressStatus::Current)
        .with_box_number("A")
        .with_postal_code("9000")
        .with_position(
            GeometryPoint::new(104_719.5, 194_533.25),
            PositionMethod::AppointedByAdministrator,
            PositionSpecification::Entry,
        )
        .officially_assigned()
}

/// A complete record for a live address, carrying both facet payloads.
///
/// Position is 0 until assigned by the log.
pub fn record(persistent_local_id: u64) -> ChangeRecord {
    ChangeRecord::new(persistent_local_id, ChangeType::Registered, timestamp())
        .with_event("<AddressWasRegistered/>")
        .with_address(snapshot())
        .with_organisation("municipality")
        .with_external_id(persistent_local_id + 10_000)
}

/// A record for an address that no longer exists: no snapshot.
pub fn removed_record(persistent_local_id: u64) -> ChangeRecord {
    ChangeRecord::new(persistent_local_id, ChangeType::Removed, timestamp())
        .with_event("<AddressWasRemoved/>")
}
