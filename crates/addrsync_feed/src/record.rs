//! Change records as they appear in the append-only log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of change that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeType {
    /// Address was registered for the first time.
    Registered,
    /// Address was approved by the responsible organisation.
    Approved,
    /// One or more address attributes were corrected.
    Corrected,
    /// Address was retired and no longer designates a live entity.
    Retired,
    /// Address was removed from the registry.
    Removed,
}

/// Lifecycle status of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressStatus {
    /// Proposed but not yet in official use.
    Proposed,
    /// In official use.
    Current,
    /// No longer in use.
    Retired,
}

/// How an address position was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionMethod {
    /// Manually appointed by an administrator.
    AppointedByAdministrator,
    /// Derived from the geometry of an associated object.
    DerivedFromObject,
}

/// The kind of object an address position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSpecification {
    /// Centroid of the municipality.
    Municipality,
    /// A cadastral parcel.
    Parcel,
    /// A lot within a parcel.
    Lot,
    /// A building.
    Building,
    /// The entry of a building.
    Entry,
    /// A road segment.
    RoadSegment,
}

/// A projected point in the registry's coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryPoint {
    /// Easting coordinate.
    pub x: f64,
    /// Northing coordinate.
    pub y: f64,
}

impl GeometryPoint {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current attributes of a live address.
///
/// Carried on a [`ChangeRecord`] only while the record still corresponds to
/// an existing entity; records of removed addresses carry no snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSnapshot {
    /// House number within the parent street.
    pub house_number: String,
    /// Box number within the house, if any.
    pub box_number: Option<String>,
    /// Identifier of the parent street name.
    pub street_name_id: u64,
    /// Postal code, if assigned.
    pub postal_code: Option<String>,
    /// Geographic position, if known.
    pub geometry: Option<GeometryPoint>,
    /// How the position was determined.
    pub position_method: Option<PositionMethod>,
    /// What the position refers to.
    pub position_specification: Option<PositionSpecification>,
    /// Whether the address was officially assigned.
    pub officially_assigned: bool,
    /// Lifecycle status.
    pub status: AddressStatus,
}

impl AddressSnapshot {
    /// Creates a snapshot with the required attributes.
    pub fn new(house_number: impl Into<String>, street_name_id: u64, status: AddressStatus) -> Self {
        Self {
            house_number: house_number.into(),
            box_number: None,
            street_name_id,
            postal_code: None,
            geometry: None,
            position_method: None,
            position_specification: None,
            officially_assigned: false,
            status,
        }
    }

    /// Sets the box number.
    pub fn with_box_number(mut self, box_number: impl Into<String>) -> Self {
        self.box_number = Some(box_number.into());
        self
    }

    /// Sets the postal code.
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the geometry and how it was determined.
    pub fn with_position(
        mut self,
        geometry: GeometryPoint,
        method: PositionMethod,
        specification: PositionSpecification,
    ) -> Self {
        self.geometry = Some(geometry);
        self.position_method = Some(method);
        self.position_specification = Some(specification);
        self
    }

    /// Marks the address as officially assigned.
    pub fn officially_assigned(mut self) -> Self {
        self.officially_assigned = true;
        self
    }
}

/// A single record from the address change log.
///
/// Records are immutable once appended. The `position` is assigned by the
/// log at append time and is strictly increasing; it is the cursor clients
/// pass back to resume the feed. Positions may have gaps from this feed's
/// perspective, since the upstream log is global across entity kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Position in the change log (the resumability cursor).
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
    /// Link to an external numbering id, if any.
    pub external_id: Option<u64>,
    /// Organisation that originated the change.
    pub organisation: Option<String>,
    /// Plan classification of the change.
    pub plan: Option<String>,
    /// Serialized representation of the triggering event.
    pub event: Option<String>,
    /// Current attributes, present while the address still exists.
    pub address: Option<AddressSnapshot>,
}

impl ChangeRecord {
    /// Creates a record with position 0 (assigned by the log on append).
    pub fn new(
        persistent_local_id: u64,
        change_type: ChangeType,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            position: 0,
            persistent_local_id,
            change_type,
            recorded_at,
            last_changed_at: recorded_at,
            is_complete: true,
            external_id: None,
            organisation: None,
            plan: None,
            event: None,
            address: None,
        }
    }

    /// Sets the serialized triggering event.
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Sets the current address attributes.
    pub fn with_address(mut self, address: AddressSnapshot) -> Self {
        self.address = Some(address);
        self
    }

    /// Sets the originating organisation.
    pub fn with_organisation(mut self, organisation: impl Into<String>) -> Self {
        self.organisation = Some(organisation.into());
        self
    }

    /// Sets the plan classification.
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    /// Sets the external numbering id.
    pub fn with_external_id(mut self, external_id: u64) -> Self {
        self.external_id = Some(external_id);
        self
    }

    /// Marks the record as incomplete.
    pub fn incomplete(mut self) -> Self {
        self.is_complete = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn new_record_defaults() {
        let record = ChangeRecord::new(7, ChangeType::Registered, ts());

        assert_eq!(record.position, 0);
        assert_eq!(record.persistent_local_id, 7);
        assert!(record.is_complete);
        assert!(record.event.is_none());
        assert!(record.address.is_none());
        assert_eq!(record.last_changed_at, record.recorded_at);
    }

    #[test]
    fn record_builders() {
        let record = ChangeRecord::new(7, ChangeType::Approved, ts())
            .with_event("<AddressWasApproved/>")
            .with_organisation("municipality")
            .with_plan("renumbering")
            .with_external_id(42)
            .incomplete();

        assert_eq!(record.event.as_deref(), Some("<AddressWasApproved/>"));
        assert_eq!(record.organisation.as_deref(), Some("municipality"));
        assert_eq!(record.plan.as_deref(), Some("renumbering"));
        assert_eq!(record.external_id, Some(42));
        assert!(!record.is_complete);
    }

    #[test]
    fn snapshot_builders() {
        let snapshot = AddressSnapshot::new("12", 900, AddressStatus::Current)
            .with_box_number("A")
            .with_postal_code("9000")
            .with_position(
                GeometryPoint::new(104_719.0, 194_533.0),
                PositionMethod::AppointedByAdministrator,
                PositionSpecification::Entry,
            )
            .officially_assigned();

        assert_eq!(snapshot.house_number, "12");
        assert_eq!(snapshot.box_number.as_deref(), Some("A"));
        assert_eq!(snapshot.postal_code.as_deref(), Some("9000"));
        assert!(snapshot.geometry.is_some());
        assert_eq!(snapshot.position_method, Some(PositionMethod::AppointedByAdministrator));
        assert!(snapshot.officially_assigned);
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = ChangeRecord::new(7, ChangeType::Registered, ts())
            .with_address(AddressSnapshot::new("1", 5, AddressStatus::Proposed));

        let json = serde_json::to_string(&record).unwrap();
        let back: ChangeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
