//! Shape selection from the caller-supplied embed parameter.

/// Which facets the caller wants included in feed items.
///
/// Parsed from the raw embed string by case-insensitive substring
/// containment of `"event"` and `"object"`. An absent or empty string is a
/// valid request for the base-only shape, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmbedIntent {
    /// Include the serialized triggering event.
    pub event: bool,
    /// Include the current entity snapshot.
    pub object: bool,
}

impl EmbedIntent {
    /// The base-only shape.
    pub fn none() -> Self {
        Self::default()
    }

    /// Both facets selected.
    pub fn both() -> Self {
        Self {
            event: true,
            object: true,
        }
    }

    /// Parses an optional embed string.
    ///
    /// Token order, separators, and case are irrelevant: `"EVENT,OBJECT"`,
    /// `"object event"`, and `"Event"` all parse as expected. Unknown text
    /// selects nothing.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::none();
        };
        let lowered = raw.to_ascii_lowercase();
        Self {
            event: lowered.contains("event"),
            object: lowered.contains("object"),
        }
    }

    /// Returns true if no facet is selected.
    pub fn is_bare(&self) -> bool {
        !self.event && !self.object
    }
}
